use serde::Serialize;
use serde_json::Value;

use super::request::{PlayersRequest, PlayersSetRequest};
use crate::controller::challonge::{
    ChallongeApiClient, FetchFailure, FetchSettings, fetch_participant_batches,
};
use crate::error::ProxyError;
use crate::model::{PlayerAggregate, aggregate};

#[derive(Debug, Serialize)]
pub struct PlayersSetResponse {
    #[serde(flatten)]
    pub aggregate: PlayerAggregate,
    /// Only filled when partial results were requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FetchFailure>,
}

/// # Errors
///
/// Will return `Err` if a fetch fails under the abort policy, the fan-out times out,
/// or upstream returned a participant without a name or id
pub async fn get_players_set(
    api: &dyn ChallongeApiClient,
    settings: &FetchSettings,
    request: &PlayersSetRequest,
) -> Result<PlayersSetResponse, ProxyError> {
    let fetched = fetch_participant_batches(
        api,
        &request.tournament_ids,
        &request.credential,
        settings,
        request.policy,
    )
    .await?;

    let aggregate = aggregate(&fetched.batches)?;
    tracing::info!(
        tournaments = request.tournament_ids.len(),
        players = aggregate.names.len(),
        failed = fetched.failures.len(),
        "players set aggregated"
    );

    Ok(PlayersSetResponse {
        aggregate,
        failures: fetched.failures,
    })
}

/// Upstream participants body for one tournament, relayed as is.
///
/// # Errors
///
/// Will return `Err` if the upstream call fails or does not finish in time
pub async fn get_players(
    api: &dyn ChallongeApiClient,
    settings: &FetchSettings,
    request: &PlayersRequest,
) -> Result<Value, ProxyError> {
    tokio::time::timeout(
        settings.timeout,
        api.get_participants_json(&request.tournament_id, &request.credential),
    )
    .await
    .map_err(|_| ProxyError::Timeout {
        after_secs: settings.timeout.as_secs(),
    })?
}
