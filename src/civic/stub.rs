use std::sync::{Arc, Mutex};

use super::CivicBackend;
use crate::error::{Error, Result};
use crate::model::{
    common::StateCode,
    deadline::Deadline,
    election::Election,
    info::{ContestList, PollingStation},
};

/// An in-memory backend serving example data, recording every call made.
///
/// Clones share the call log, so a test can keep one handle while Rocket
/// manages another.
#[derive(Debug, Clone)]
pub struct StubBackend {
    failing: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    pub fn example() -> Self {
        Self {
            failing: false,
            calls: Arc::default(),
        }
    }

    /// A backend that rejects every request with a server error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            calls: Arc::default(),
        }
    }

    /// The calls made so far, in order, as `METHOD /endpoint?params`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        let endpoint = call
            .split_once(' ')
            .map(|(_, rest)| rest.split('?').next().unwrap_or(rest).to_string())
            .unwrap_or_default();
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(Error::Upstream {
                endpoint,
                status: 500,
            })
        } else {
            Ok(())
        }
    }
}

#[rocket::async_trait]
impl CivicBackend for StubBackend {
    async fn elections(&self) -> Result<Vec<Election>> {
        self.record("GET /election".to_string())?;
        Ok(Election::examples())
    }

    async fn contests(&self, election_id: &str) -> Result<ContestList> {
        self.record(format!("GET /contests?electionId={election_id}"))?;
        Ok(ContestList::example())
    }

    async fn deadlines(&self, state: &StateCode) -> Result<Vec<Deadline>> {
        self.record(format!("GET /deadlines?state={state}"))?;
        Ok(Deadline::examples())
    }

    async fn refresh_info_cards(&self, election_id: &str, address: &str) -> Result<()> {
        self.record(format!(
            "PUT /info-cards?electionId={election_id}&address={address}"
        ))
    }

    async fn polling_stations(&self, election_id: &str) -> Result<Vec<PollingStation>> {
        self.record(format!("GET /polling-stations?electionId={election_id}"))?;
        Ok(vec![
            PollingStation::example(),
            PollingStation::unknown_dates_example(),
        ])
    }
}
