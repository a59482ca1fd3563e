use log::{error, warn};
use rocket::{form::Errors, http::Status, response::Responder};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The backend could not be reached, or sent something unreadable.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("Backend responded to {endpoint} with {status}")]
    Upstream { endpoint: String, status: u16 },
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl Error {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Http(_) | Self::Upstream { .. } => Status::BadGateway,
            Self::BadRequest(_) => Status::BadRequest,
        }
    }
}

impl<'r> From<Errors<'r>> for Error {
    fn from(errs: Errors<'r>) -> Self {
        Self::BadRequest(errs.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        match status.class() {
            rocket::http::StatusClass::ServerError => error!("{self}"),
            _ => warn!("{self}"),
        }
        Err(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_are_bad_gateway() {
        let err = Error::Upstream {
            endpoint: "/election".to_string(),
            status: 500,
        };
        assert_eq!(err.status(), Status::BadGateway);
        assert_eq!(err.to_string(), "Backend responded to /election with 500");
    }

    #[test]
    fn form_errors_are_bad_request() {
        let errs = Errors::from(rocket::form::Error::validation("invalid state"));
        let err: Error = errs.into();
        assert_eq!(err.status(), Status::BadRequest);
        assert!(err.to_string().contains("invalid state"));
    }
}
