use log::{debug, info};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::CivicBackend;
use crate::error::{Error, Result};
use crate::model::{
    common::StateCode,
    deadline::Deadline,
    election::Election,
    info::{ContestList, PollingStation},
};

const ELECTION: &str = "election";
const CONTESTS: &str = "contests";
const DEADLINES: &str = "deadlines";
const INFO_CARDS: &str = "info-cards";
const POLLING_STATIONS: &str = "polling-stations";

/// [`CivicBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Send a request, rejecting any non-success status.
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response> {
        debug!("Calling backend /{endpoint}");
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Upstream {
                endpoint: format!("/{endpoint}"),
                status: status.as_u16(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.client.get(self.url(endpoint)).query(query);
        Ok(self.send(request, endpoint).await?.json().await?)
    }
}

#[rocket::async_trait]
impl CivicBackend for HttpBackend {
    async fn elections(&self) -> Result<Vec<Election>> {
        self.get_json(ELECTION, &[]).await
    }

    async fn contests(&self, election_id: &str) -> Result<ContestList> {
        self.get_json(CONTESTS, &[("electionId", election_id)])
            .await
    }

    async fn deadlines(&self, state: &StateCode) -> Result<Vec<Deadline>> {
        self.get_json(DEADLINES, &[("state", state.as_str())]).await
    }

    async fn refresh_info_cards(&self, election_id: &str, address: &str) -> Result<()> {
        let request = self
            .client
            .put(self.url(INFO_CARDS))
            .query(&[("electionId", election_id), ("address", address)]);
        self.send(request, INFO_CARDS).await?;
        info!("Refreshed info cards for election {election_id}");
        Ok(())
    }

    async fn polling_stations(&self, election_id: &str) -> Result<Vec<PollingStation>> {
        self.get_json(POLLING_STATIONS, &[("electionId", election_id)])
            .await
    }
}
