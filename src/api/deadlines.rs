use rocket::{form::Errors, serde::json::Json, Route, State};

use crate::civic::Backend;
use crate::error::Result;
use crate::model::{
    common::{Calendar, StateCode},
    view::DeadlinesView,
};

pub fn routes() -> Vec<Route> {
    routes![deadlines]
}

/// Registration and ballot deadlines for the given state.
#[get("/deadlines?<state>")]
async fn deadlines(
    state: std::result::Result<StateCode, Errors<'_>>,
    backend: &State<Backend>,
    calendar: &State<Calendar>,
) -> Result<Json<DeadlinesView>> {
    let state = state?;
    let deadlines = backend.deadlines(&state).await?;
    Ok(Json(DeadlinesView::new(state, deadlines, calendar)))
}

#[cfg(test)]
mod tests {
    use rocket::{http::Status, local::asynchronous::Client, serde::json::serde_json};

    use crate::civic::StubBackend;

    use super::*;

    #[backend_test]
    async fn groups_deadlines_for_state(client: Client, backend: StubBackend) {
        let response = client.get("/deadlines?state=ca").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let raw_response = response.into_string().await.unwrap();
        let view = serde_json::from_str::<DeadlinesView>(&raw_response).unwrap();

        let general = view.general.unwrap();
        assert_eq!(
            general.heading,
            "Key deadlines in California for this national election:"
        );
        assert_eq!(general.lines.len(), 1);
        assert_eq!(
            general.lines[0].sentence,
            "A ballot postmarked must be received by"
        );
        assert_eq!(general.lines[0].date, "November 3, 2020");
        assert_eq!(view.primary.unwrap().lines.len(), 1);
        assert_eq!(view.runoff.unwrap().lines.len(), 1);

        assert_eq!(backend.calls(), vec!["GET /deadlines?state=ca"]);
    }

    #[backend_test]
    async fn invalid_state_is_rejected(client: Client) {
        let response = client.get("/deadlines?state=c4").dispatch().await;

        assert_eq!(Status::BadRequest, response.status());
    }

    #[backend_test(failing)]
    async fn backend_failure_is_bad_gateway(client: Client) {
        let response = client.get("/deadlines?state=ca").dispatch().await;

        assert_eq!(Status::BadGateway, response.status());
    }
}
