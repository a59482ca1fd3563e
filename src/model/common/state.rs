use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use rocket::form::{self, prelude::ErrorKind, FromFormField, ValueField};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display names for the region codes that the election data uses.
static STATE_NAMES: &[(&str, &str)] = &[
    ("ab", "Alberta"),
    ("ak", "Alaska"),
    ("al", "Alabama"),
    ("ar", "Arkansas"),
    ("az", "Arizona"),
    ("bc", "British Columbia"),
    ("ca", "California"),
    ("co", "Colorado"),
    ("ct", "Connecticut"),
    ("dc", "District Of Columbia"),
    ("de", "Delaware"),
    ("fl", "Florida"),
    ("ga", "Georgia"),
    ("gu", "Guam"),
    ("hi", "Hawaii"),
    ("ia", "Iowa"),
    ("id", "Idaho"),
    ("il", "Illinois"),
    ("in", "Indiana"),
    ("ks", "Kansas"),
    ("ky", "Kentucky"),
    ("la", "Louisiana"),
    ("ma", "Massachusetts"),
    ("mb", "Manitoba"),
    ("md", "Maryland"),
    ("me", "Maine"),
    ("mi", "Michigan"),
    ("mn", "Minnesota"),
    ("mo", "Missouri"),
    ("ms", "Mississippi"),
    ("mt", "Montana"),
    ("nb", "New Brunswick"),
    ("nc", "North Carolina"),
    ("nd", "North Dakota"),
    ("ne", "Nebraska"),
    ("nf", "Newfoundland"),
    ("nh", "New Hampshire"),
    ("nj", "New Jersey"),
    ("nm", "New Mexico"),
    ("ns", "Nova Scotia"),
    ("nt", "Northwest Territories"),
    ("nu", "Nunavut"),
    ("nv", "Nevada"),
    ("ny", "New York"),
    ("oh", "Ohio"),
    ("ok", "Oklahoma"),
    ("on", "Ontario"),
    ("or", "Oregon"),
    ("pa", "Pennsylvania"),
    ("pe", "Prince Edward Island"),
    ("pr", "Puerto Rico"),
    ("qc", "Quebec"),
    ("ri", "Rhode Island"),
    ("sc", "South Carolina"),
    ("sd", "South Dakota"),
    ("sk", "Saskatchewan"),
    ("tn", "Tennessee"),
    ("tx", "Texas"),
    ("ut", "Utah"),
    ("va", "Virginia"),
    ("vi", "Virgin Islands"),
    ("vt", "Vermont"),
    ("wa", "Washington"),
    ("wi", "Wisconsin"),
    ("wv", "West Virginia"),
    ("wy", "Wyoming"),
    ("yt", "Yukon Territory"),
];

/// A two-letter, lowercase state (or district/territory) code, as found in
/// OCD division IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected a two-letter state code, got '{0}'")]
pub struct StateCodeError(pub String);

impl StateCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The human-readable name, e.g. `California` for `ca`.
    ///
    /// Codes missing from the table fall back to the upper-cased code.
    pub fn name(&self) -> String {
        STATE_NAMES
            .binary_search_by_key(&self.as_str(), |&(code, _)| code)
            .map(|i| STATE_NAMES[i].1.to_string())
            .unwrap_or_else(|_| self.0.to_uppercase())
    }
}

impl FromStr for StateCode {
    type Err = StateCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(StateCodeError(s.to_string()))
        }
    }
}

impl TryFrom<String> for StateCode {
    type Error = StateCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl Display for StateCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rocket::async_trait]
impl<'r> FromFormField<'r> for StateCode {
    fn from_value(field: ValueField<'r>) -> form::Result<'r, Self> {
        field
            .value
            .parse()
            .map_err(|err| ErrorKind::Custom(Box::new(err)).into())
    }
}
