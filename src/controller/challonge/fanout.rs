use crate::controller::challonge::client::{ChallongeApiClient, fetch_participants};
use crate::error::ProxyError;
use crate::model::{Credential, Participant};
use futures::{StreamExt, stream};
use serde::Serialize;
use std::pin::pin;
use std::time::Duration;

pub const DEFAULT_FETCH_FANOUT: usize = 6;
pub const DEFAULT_MAX_TOURNAMENTS: usize = 32;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    /// Upper bound on participants calls in flight for one request.
    pub fanout: usize,
    /// Upper bound on identifiers accepted in one request.
    pub max_tournaments: usize,
    /// Deadline shared by every call of one fan-out.
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            fanout: DEFAULT_FETCH_FANOUT,
            max_tournaments: DEFAULT_MAX_TOURNAMENTS,
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

/// What to do when one tournament of a fan-out fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    #[default]
    AbortAll,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchFailure {
    pub tournament_id: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct FetchedBatches {
    /// One batch per successful tournament, in request order.
    pub batches: Vec<Vec<Participant>>,
    pub failures: Vec<FetchFailure>,
}

/// Fetches participants for every id, at most `settings.fanout` at a time.
///
/// Batches come back in the order of `ids` no matter which call finishes first. The whole
/// fan-out shares one deadline; when it passes, every call still in flight is dropped.
///
/// # Errors
///
/// Will return `Err` on timeout, or on the first failed tournament (in request order)
/// under [`FailurePolicy::AbortAll`]
pub async fn fetch_participant_batches(
    api: &dyn ChallongeApiClient,
    ids: &[String],
    credential: &Credential,
    settings: &FetchSettings,
    policy: FailurePolicy,
) -> Result<FetchedBatches, ProxyError> {
    let fetches = stream::iter(ids.iter().map(|id| async move {
        (id, fetch_participants(api, id, credential).await)
    }))
    .buffered(settings.fanout.max(1));

    let collect = async {
        let mut fetches = pin!(fetches);
        let mut fetched = FetchedBatches {
            batches: Vec::with_capacity(ids.len()),
            failures: Vec::new(),
        };
        while let Some((id, result)) = fetches.next().await {
            match result {
                Ok(batch) => {
                    tracing::debug!(tournament_id = %id, participants = batch.len(), "batch fetched");
                    fetched.batches.push(batch);
                }
                Err(err) => {
                    tracing::warn!(tournament_id = %id, error = %err, "participants fetch failed");
                    if policy == FailurePolicy::AbortAll {
                        return Err(err);
                    }
                    fetched.failures.push(FetchFailure {
                        tournament_id: id.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }
        Ok(fetched)
    };

    tokio::time::timeout(settings.timeout, collect)
        .await
        .map_err(|_| ProxyError::Timeout {
            after_secs: settings.timeout.as_secs(),
        })?
}
