pub mod calendar;
pub mod ocd;
pub mod state;

pub use calendar::{Calendar, INVALID_DATE};
pub use ocd::{OcdDivisionId, Scope};
pub use state::{StateCode, StateCodeError};
