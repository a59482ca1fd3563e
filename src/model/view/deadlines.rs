use serde::{Deserialize, Serialize};

use crate::model::{
    common::{Calendar, StateCode},
    deadline::{group_deadlines, process_rule, Deadline, ElectionType},
};

/// Key voting deadlines for a state, grouped by election type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlinesView {
    pub state: StateCode,
    pub state_name: String,
    pub primary: Option<DeadlineSection>,
    pub runoff: Option<DeadlineSection>,
    pub general: Option<DeadlineSection>,
}

/// A titled list of deadlines for one election type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineSection {
    pub heading: String,
    pub lines: Vec<DeadlineLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineLine {
    /// E.g. `A ballot postmarked must be received by`.
    pub sentence: String,
    /// E.g. `November 3, 2020`.
    pub date: String,
}

impl DeadlineLine {
    pub fn new(deadline: &Deadline, calendar: &Calendar) -> Self {
        Self {
            sentence: process_rule(&deadline.rule, &deadline.voting_type),
            date: calendar.format_date(Some(&deadline.date)),
        }
    }
}

/// How each election type is described in section headings.
fn election_description(election_type: ElectionType) -> &'static str {
    match election_type {
        ElectionType::GeneralElection => "national",
        ElectionType::StatePrimary => "primary",
        ElectionType::StatePrimaryRunoff => "primary runoff",
    }
}

impl DeadlinesView {
    pub fn new(
        state: StateCode,
        deadlines: impl IntoIterator<Item = Deadline>,
        calendar: &Calendar,
    ) -> Self {
        let state_name = state.name();
        let groups = group_deadlines(deadlines);
        let section = |election_type: ElectionType| {
            let deadlines = groups.get(election_type);
            if deadlines.is_empty() {
                return None;
            }
            Some(DeadlineSection {
                heading: format!(
                    "Key deadlines in {state_name} for this {} election:",
                    election_description(election_type)
                ),
                lines: deadlines
                    .iter()
                    .map(|deadline| DeadlineLine::new(deadline, calendar))
                    .collect(),
            })
        };
        Self {
            primary: section(ElectionType::StatePrimary),
            runoff: section(ElectionType::StatePrimaryRunoff),
            general: section(ElectionType::GeneralElection),
            state,
            state_name,
        }
    }
}
