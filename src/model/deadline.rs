use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// A voting-related due date for a state, as listed by `GET /deadlines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    /// Which kind of election this applies to. Kept raw; see [`ElectionType`].
    pub election_type: String,
    /// Free-text rule, optionally `"<method>:<due date description>"`.
    pub rule: String,
    #[serde(alias = "voting-request-type")]
    pub voting_type: String,
    pub date: String,
}

/// The election types that deadlines are displayed under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElectionType {
    GeneralElection,
    StatePrimary,
    StatePrimaryRunoff,
}

impl ElectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralElection => "General Election",
            Self::StatePrimary => "State Primary",
            Self::StatePrimaryRunoff => "State Primary Runoff",
        }
    }
}

impl FromStr for ElectionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General Election" => Ok(Self::GeneralElection),
            "State Primary" => Ok(Self::StatePrimary),
            "State Primary Runoff" => Ok(Self::StatePrimaryRunoff),
            _ => Err(()),
        }
    }
}

/// The kinds of voting request a deadline can govern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VotingType {
    Registration,
    BallotRequest,
    BallotReturn,
}

impl VotingType {
    /// The subject of a deadline sentence for this request type.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Registration => "Voter registration",
            Self::BallotReturn => "A ballot",
            Self::BallotRequest => "A ballot request",
        }
    }
}

impl FromStr for VotingType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Registration" => Ok(Self::Registration),
            "Ballot Request" => Ok(Self::BallotRequest),
            "Ballot Return" => Ok(Self::BallotReturn),
            _ => Err(()),
        }
    }
}

/// Deadlines split by election type, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeadlineGroups {
    pub general: Vec<Deadline>,
    pub primary: Vec<Deadline>,
    pub runoff: Vec<Deadline>,
}

impl DeadlineGroups {
    pub fn get(&self, election_type: ElectionType) -> &[Deadline] {
        match election_type {
            ElectionType::GeneralElection => &self.general,
            ElectionType::StatePrimary => &self.primary,
            ElectionType::StatePrimaryRunoff => &self.runoff,
        }
    }

    fn get_mut(&mut self, election_type: ElectionType) -> &mut Vec<Deadline> {
        match election_type {
            ElectionType::GeneralElection => &mut self.general,
            ElectionType::StatePrimary => &mut self.primary,
            ElectionType::StatePrimaryRunoff => &mut self.runoff,
        }
    }
}

/// Group deadlines by election type. Deadlines of any other type are dropped.
pub fn group_deadlines(deadlines: impl IntoIterator<Item = Deadline>) -> DeadlineGroups {
    let mut groups = DeadlineGroups::default();
    for deadline in deadlines {
        match deadline.election_type.parse::<ElectionType>() {
            Ok(election_type) => groups.get_mut(election_type).push(deadline),
            Err(()) => debug!(
                "Dropping deadline with unknown election type '{}'",
                deadline.election_type
            ),
        }
    }
    groups
}

/// Turn a deadline rule into a sentence, e.g. rule `"postmarked:received by"`
/// with voting type `"Ballot Return"` becomes
/// `"A ballot postmarked must be received by"`.
///
/// The date itself is not included; it is displayed alongside.
pub fn process_rule(rule: &str, voting_type: &str) -> String {
    let (method, due) = match rule.split_once(':') {
        Some((method, due)) => (method.trim(), due),
        None => ("", rule),
    };
    let due = due.replace('*', "");
    let due = due.trim();
    let due = match due.strip_prefix("must be") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim_start(),
        _ => due,
    };

    let subject = capitalize(normalize_voting_type(voting_type));
    if method.is_empty() {
        format!("{subject} must be {due}")
    } else {
        format!("{subject} {method} must be {due}")
    }
}

fn normalize_voting_type(voting_type: &str) -> &str {
    match voting_type.parse::<VotingType>() {
        Ok(known) => known.subject(),
        Err(()) => voting_type,
    }
}

/// Lower-case everything, then upper-case the first character.
fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
