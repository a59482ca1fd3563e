#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

use crate::civic::Backend;
use crate::config::{BackendFairing, ConfigFairing};
use crate::logging::LoggerFairing;
use crate::model::common::Calendar;

pub mod api;
pub mod civic;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

/// Build the server, talking to the backend named in the configuration.
pub fn build() -> Rocket<Build> {
    base()
        .attach(ConfigFairing)
        .attach(BackendFairing)
}

/// Build the server around an existing backend.
pub fn rocket_for_backend(backend: Backend) -> Rocket<Build> {
    base().manage(backend)
}

fn base() -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .manage(Calendar::default())
        .attach(LoggerFairing)
}
