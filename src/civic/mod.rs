//! Access to the civic-information backend that owns the election data.

use crate::error::Result;
use crate::model::{
    common::StateCode,
    deadline::Deadline,
    election::Election,
    info::{ContestList, PollingStation},
};

mod http;
#[cfg(test)]
mod stub;

pub use http::HttpBackend;
#[cfg(test)]
pub use stub::StubBackend;

/// The backend as held in managed state.
pub type Backend = Box<dyn CivicBackend>;

/// The endpoints the front end consumes.
///
/// Every call is a single request; nothing is retried.
#[rocket::async_trait]
pub trait CivicBackend: Send + Sync {
    /// `GET /election`
    async fn elections(&self) -> Result<Vec<Election>>;

    /// `GET /contests?electionId=`
    async fn contests(&self, election_id: &str) -> Result<ContestList>;

    /// `GET /deadlines?state=`
    async fn deadlines(&self, state: &StateCode) -> Result<Vec<Deadline>>;

    /// `PUT /info-cards?electionId=&address=`
    ///
    /// Asks the backend to (re)compute the info cards for an address. Only
    /// success or failure is reported.
    async fn refresh_info_cards(&self, election_id: &str, address: &str) -> Result<()>;

    /// `GET /polling-stations?electionId=`
    async fn polling_stations(&self, election_id: &str) -> Result<Vec<PollingStation>>;
}
