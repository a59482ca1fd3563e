//! Display-ready structures built from backend data. These take the place of
//! template contexts: any renderer can consume them as JSON.

mod deadlines;
mod election_list;
mod info_card;

pub use deadlines::{DeadlineLine, DeadlineSection, DeadlinesView};
pub use election_list::{ElectionCard, ElectionListView};
pub use info_card::{InfoCardView, PollingStationCard};
