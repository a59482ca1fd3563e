use log::info;
use rocket::{serde::json::Json, Route, State};

use crate::civic::Backend;
use crate::error::{Error, Result};
use crate::model::{
    common::Calendar,
    view::{InfoCardView, PollingStationCard},
};

pub fn routes() -> Vec<Route> {
    routes![info_card, polling_stations]
}

/// Contests, candidates, referendums and polling stations for an election
/// at the given address.
///
/// The backend is first asked to refresh its info cards for the address,
/// then queried; each step waits for the previous one.
#[get("/elections/<election_id>/info?<address>")]
async fn info_card(
    election_id: &str,
    address: &str,
    backend: &State<Backend>,
    calendar: &State<Calendar>,
) -> Result<Json<InfoCardView>> {
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::bad_request("An address is required"));
    }

    backend.refresh_info_cards(election_id, address).await?;
    let contests = backend.contests(election_id).await?;
    let polling_stations = backend.polling_stations(election_id).await?;
    info!(
        "Built info card for election {election_id} with {} contests and {} polling stations",
        contests.contests.len(),
        polling_stations.len()
    );

    Ok(Json(InfoCardView::new(
        election_id.to_string(),
        address.to_string(),
        contests,
        polling_stations,
        calendar,
    )))
}

/// Polling stations alone, for placing on a map.
#[get("/elections/<election_id>/polling-stations")]
async fn polling_stations(
    election_id: &str,
    backend: &State<Backend>,
    calendar: &State<Calendar>,
) -> Result<Json<Vec<PollingStationCard>>> {
    let stations: Vec<_> = backend
        .polling_stations(election_id)
        .await?
        .into_iter()
        .map(|station| PollingStationCard::new(station, calendar))
        .collect();
    Ok(Json(stations))
}
