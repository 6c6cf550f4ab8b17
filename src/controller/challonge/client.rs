use crate::error::ProxyError;
use crate::model::{Credential, Participant, participants_from_json};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.challonge.com/v1/tournaments";
const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// The one upstream call the core depends on. Tests swap in a scripted implementation.
#[async_trait]
pub trait ChallongeApiClient: Send + Sync {
    /// Raw participants body for one tournament path segment.
    async fn get_participants_json(
        &self,
        tournament_id: &str,
        credential: &Credential,
    ) -> Result<Value, ProxyError>;
}

/// # Errors
///
/// Will return `Err` if the upstream call fails or the body is not a participants list
pub async fn fetch_participants(
    api: &dyn ChallongeApiClient,
    tournament_id: &str,
    credential: &Credential,
) -> Result<Vec<Participant>, ProxyError> {
    let body = api.get_participants_json(tournament_id, credential).await?;
    participants_from_json(tournament_id, body)
}

#[derive(Debug, Clone)]
pub struct ReqwestChallongeClient {
    client: Client,
    base_url: Url,
}

impl ReqwestChallongeClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// `{base}/{tournament_id}/participants.json?api_key=...`, with the id escaped as one path segment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the base url cannot carry a path
    pub fn participants_url(
        &self,
        tournament_id: &str,
        credential: &Credential,
    ) -> Result<Url, ProxyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProxyError::Client(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .push(tournament_id)
            .push("participants.json");
        url.query_pairs_mut()
            .append_pair("api_key", credential.as_str());
        Ok(url)
    }
}

#[async_trait]
impl ChallongeApiClient for ReqwestChallongeClient {
    async fn get_participants_json(
        &self,
        tournament_id: &str,
        credential: &Credential,
    ) -> Result<Value, ProxyError> {
        let url = self.participants_url(tournament_id, credential)?;
        tracing::debug!(tournament_id, "fetching participants");

        let upstream_err = |e: reqwest::Error| ProxyError::upstream(tournament_id, e.into());
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(upstream_err)?
            .error_for_status()
            .map_err(upstream_err)?;
        resp.json::<Value>().await.map_err(upstream_err)
    }
}
