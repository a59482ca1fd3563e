use serde::{Deserialize, Serialize};

use crate::model::{
    common::{Calendar, StateCode},
    election::{classify, Election},
};

/// Everything needed to render the election list for a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionListView {
    pub state: StateCode,
    pub state_name: String,
    pub state_elections: Vec<ElectionCard>,
    pub national_elections: Vec<ElectionCard>,
}

/// A single entry in the election list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionCard {
    pub id: String,
    pub name: String,
    pub scope: String,
    /// Display date, e.g. `November 3, 2020`.
    pub date: String,
}

impl ElectionCard {
    pub fn new(election: &Election, calendar: &Calendar) -> Self {
        Self {
            id: election.id.clone(),
            name: election.name.clone(),
            scope: election.scope.to_string(),
            date: calendar.format_date(Some(&election.election_day)),
        }
    }
}

impl ElectionListView {
    pub fn new(state: StateCode, elections: &[Election], calendar: &Calendar) -> Self {
        let partition = classify(elections, &state);
        let cards = |elections: Vec<&Election>| -> Vec<ElectionCard> {
            elections
                .into_iter()
                .map(|election| ElectionCard::new(election, calendar))
                .collect()
        };
        Self {
            state_name: state.name(),
            state_elections: cards(partition.state_elections),
            national_elections: cards(partition.national_elections),
            state,
        }
    }
}
