use rocket::{form::Errors, serde::json::Json, Route, State};

use crate::civic::Backend;
use crate::error::Result;
use crate::model::{
    common::{Calendar, StateCode},
    view::ElectionListView,
};

pub fn routes() -> Vec<Route> {
    routes![elections]
}

/// Upcoming elections relevant to the given state: its own state and
/// district elections, plus national ones.
#[get("/elections?<state>")]
async fn elections(
    state: std::result::Result<StateCode, Errors<'_>>,
    backend: &State<Backend>,
    calendar: &State<Calendar>,
) -> Result<Json<ElectionListView>> {
    let state = state?;
    let elections = backend.elections().await?;
    Ok(Json(ElectionListView::new(state, &elections, calendar)))
}
