use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::common::{OcdDivisionId, Scope, StateCode};

/// An upcoming election, as listed by `GET /election`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub id: String,
    pub name: String,
    pub scope: OcdDivisionId,
    /// Date in the form `YYYY-MM-DD`. Older backends call this `date`.
    #[serde(alias = "date")]
    pub election_day: String,
}

/// Elections relevant to a selected state, split by level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectionPartition<'a> {
    /// State and district elections for the selected state.
    pub state_elections: Vec<&'a Election>,
    /// Country-level elections.
    pub national_elections: Vec<&'a Election>,
}

/// Split `elections` into those for the selected state and national ones,
/// preserving input order within each group.
///
/// Elections coded for any other state or district appear in neither group.
pub fn classify<'a>(
    elections: impl IntoIterator<Item = &'a Election>,
    selected: &StateCode,
) -> ElectionPartition<'a> {
    let mut partition = ElectionPartition::default();
    for election in elections {
        match election.scope.scope() {
            Scope::Regional(code) if code == selected.as_str() => {
                partition.state_elections.push(election)
            }
            Scope::Regional(code) => {
                debug!("Skipping election {} for region '{code}'", election.id)
            }
            Scope::National => partition.national_elections.push(election),
        }
    }
    partition
}
