use serde::{Deserialize, Serialize};

use crate::model::{
    common::Calendar,
    info::{Candidate, Contest, ContestList, PollingStation, Referendum},
};

/// The contests, candidates, referendums and polling stations relevant to
/// an election at a given address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoCardView {
    pub election_id: String,
    pub address: String,
    pub contests: Vec<Contest>,
    /// Every contest's candidates, in contest order.
    pub candidates: Vec<Candidate>,
    pub referendums: Vec<Referendum>,
    pub polling_stations: Vec<PollingStationCard>,
}

/// A polling station ready for display, e.g. as a map marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingStationCard {
    pub name: String,
    pub address: String,
    /// E.g. `Early vote site`.
    pub kind: String,
    /// E.g. `Open 9am - 5pm from October 31, 2020 to November 3, 2020`.
    pub availability: String,
    pub sources: Vec<String>,
}

impl PollingStationCard {
    pub fn new(station: PollingStation, calendar: &Calendar) -> Self {
        // Missing dates arrive as phrases, which are shown as-is.
        let date = |raw: &str| {
            calendar
                .try_format_date(Some(raw))
                .unwrap_or_else(|| raw.to_string())
        };
        let availability = format!(
            "Open {} from {} to {}",
            station.polling_hours,
            date(&station.start_date),
            date(&station.end_date)
        );
        Self {
            kind: station.location_type.label().to_string(),
            name: station.name,
            address: station.address,
            availability,
            sources: station.sources,
        }
    }
}

impl InfoCardView {
    pub fn new(
        election_id: String,
        address: String,
        contest_list: ContestList,
        polling_stations: Vec<PollingStation>,
        calendar: &Calendar,
    ) -> Self {
        let candidates = contest_list
            .contests
            .iter()
            .flat_map(|contest| contest.candidates.iter().cloned())
            .collect();
        Self {
            election_id,
            address,
            contests: contest_list.contests,
            candidates,
            referendums: contest_list.referendums,
            polling_stations: polling_stations
                .into_iter()
                .map(|station| PollingStationCard::new(station, calendar))
                .collect(),
        }
    }
}
