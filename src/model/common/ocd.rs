use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Segment markers that introduce a region code within a division ID.
const REGION_MARKERS: [&str; 2] = ["state:", "district:"];

/// Number of characters in a region code.
const REGION_CODE_LEN: usize = 2;

/// An Open Civic Data division identifier, such as
/// `ocd-division/country:us/state:la`.
///
/// The hierarchy is country, then optionally state or district. IDs are
/// stored verbatim and only interpreted on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OcdDivisionId(String);

/// Where an election takes place, as far as the division ID tells us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// No state or district segment: a country-level election.
    National,
    /// A state or district election, carrying the region code.
    Regional(&'a str),
}

impl OcdDivisionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code following the first `state:` or `district:` segment.
    ///
    /// This is at most two characters; a truncated ID yields a shorter code.
    pub fn region_code(&self) -> Option<&str> {
        let (_, start) = REGION_MARKERS
            .iter()
            .filter_map(|marker| self.0.find(marker).map(|i| (i, i + marker.len())))
            .min()?;
        let rest = &self.0[start..];
        let end = rest
            .char_indices()
            .nth(REGION_CODE_LEN)
            .map_or(rest.len(), |(i, _)| i);
        Some(&rest[..end])
    }

    pub fn scope(&self) -> Scope<'_> {
        match self.region_code() {
            Some(code) => Scope::Regional(code),
            None => Scope::National,
        }
    }
}

impl Display for OcdDivisionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OcdDivisionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
