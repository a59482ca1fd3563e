use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::civic::{Backend, HttpBackend};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    backend_url: String,
}

impl Config {
    /// Base URL of the civic-information backend, e.g. `http://localhost:8080`.
    /// Configured via `BACKEND_URL`.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that builds an HTTP client for the configured backend and
/// places it into managed state as a [`Backend`].
///
/// Must be attached after [`ConfigFairing`].
pub struct BackendFairing;

#[rocket::async_trait]
impl Fairing for BackendFairing {
    fn info(&self) -> Info {
        Info {
            name: "Civic backend",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let backend_url = match rocket.state::<Config>() {
            Some(config) => config.backend_url().to_string(),
            None => {
                error!("Backend requested before the application config was loaded");
                return Err(rocket);
            }
        };
        let backend: Backend = Box::new(HttpBackend::new(backend_url.clone()));
        info!("Using civic backend at {backend_url}");

        // Manage the state.
        rocket = rocket.manage(backend);
        Ok(rocket)
    }
}
