use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Contests and referendums for one election, as returned by `GET /contests`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestList {
    pub contests: Vec<Contest>,
    pub referendums: Vec<Referendum>,
}

/// A public office being contested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contest {
    pub name: String,
    pub description: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub party_affiliation: String,
    pub campaign_site: String,
    pub platform_description: String,
    /// Social media handles, keyed by channel type.
    pub channels: HashMap<String, String>,
}

/// A ballot measure put directly to voters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Referendum {
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub division: String,
}

/// Somewhere a vote can be cast or a ballot dropped off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingStation {
    pub name: String,
    pub address: String,
    pub polling_hours: String,
    pub start_date: String,
    pub end_date: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// What kind of location a [`PollingStation`] is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationType {
    PollingLocation,
    EarlyVoteSite,
    DropOffLocation,
}

impl LocationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PollingLocation => "Polling location",
            Self::EarlyVoteSite => "Early vote site",
            Self::DropOffLocation => "Drop-off location",
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn deserializes_contest_list() {
        let raw = r#"{
            "contests": [{
                "name": "Governor",
                "description": "",
                "candidates": [{
                    "name": "Jane Doe",
                    "partyAffiliation": "Independent",
                    "campaignSite": "https://example.com",
                    "platformDescription": "",
                    "channels": {"Twitter": "janedoe"}
                }]
            }],
            "referendums": [{
                "title": "Proposition 1",
                "description": "Funding for schools",
                "source": "Voting Information Project",
                "url": "",
                "division": "ocd-division/country:us/state:ca"
            }]
        }"#;
        let list: ContestList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.contests[0].candidates[0].channels["Twitter"], "janedoe");
        assert_eq!(list.referendums[0].title, "Proposition 1");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let list: ContestList = serde_json::from_str("{}").unwrap();
        assert_eq!(list, ContestList::default());
    }

    #[test]
    fn location_types_use_backend_names() {
        let station: PollingStation = serde_json::from_str(
            r#"{
                "name": "Town Hall",
                "address": "1 Main St, Springfield, CA 90000",
                "pollingHours": "9am - 5pm",
                "startDate": "2020-10-31",
                "endDate": "2020-11-03",
                "locationType": "dropOffLocation"
            }"#,
        )
        .unwrap();
        assert_eq!(station.location_type, LocationType::DropOffLocation);
        assert_eq!(station.location_type.label(), "Drop-off location");
        assert!(station.sources.is_empty());
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl ContestList {
        pub fn example() -> Self {
            Self {
                contests: vec![Contest::example1(), Contest::example2()],
                referendums: vec![Referendum::example()],
            }
        }
    }

    impl Contest {
        pub fn example1() -> Self {
            Self {
                name: "Governor".to_string(),
                description: "Head of the state executive".to_string(),
                candidates: vec![Candidate::example("Jane Doe"), Candidate::example("John Smith")],
            }
        }

        pub fn example2() -> Self {
            Self {
                name: "Mayor".to_string(),
                description: String::new(),
                candidates: vec![Candidate::example("Alex Roe")],
            }
        }
    }

    impl Candidate {
        pub fn example(name: &str) -> Self {
            Self {
                name: name.to_string(),
                party_affiliation: "Independent".to_string(),
                ..Default::default()
            }
        }
    }

    impl Referendum {
        pub fn example() -> Self {
            Self {
                title: "Proposition 1".to_string(),
                description: "Funding for schools".to_string(),
                source: "Voting Information Project".to_string(),
                url: String::new(),
                division: "ocd-division/country:us/state:ca".to_string(),
            }
        }
    }

    impl PollingStation {
        pub fn example() -> Self {
            Self {
                name: "Town Hall".to_string(),
                address: "1 Main St, Springfield, CA 90000".to_string(),
                polling_hours: "9am - 5pm".to_string(),
                start_date: "2020-10-31".to_string(),
                end_date: "2020-11-03".to_string(),
                location_type: LocationType::EarlyVoteSite,
                sources: vec!["Voting Information Project".to_string()],
            }
        }

        pub fn unknown_dates_example() -> Self {
            Self {
                name: "Polling Station".to_string(),
                address: "2 Elm St, Springfield, CA 90000".to_string(),
                polling_hours: "daily".to_string(),
                start_date: "on an unknown start date".to_string(),
                end_date: "an unknown end date".to_string(),
                location_type: LocationType::PollingLocation,
                sources: vec![],
            }
        }
    }
}
