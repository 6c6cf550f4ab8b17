#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use challonge_proxy::controller::challonge::ChallongeApiClient;
use challonge_proxy::error::{ProxyError, UpstreamCause};
use challonge_proxy::model::Credential;
use serde_json::{Value, json};

/// What the fake upstream answers for one tournament.
#[derive(Clone)]
pub struct Scripted {
    pub body: Result<Value, UpstreamCause>,
    pub delay: Duration,
}

/// In-memory upstream. Tracks call order and how many calls overlapped.
#[derive(Default)]
pub struct ScriptedClient {
    responses: HashMap<String, Scripted>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<String>>,
    keys_seen: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, tournament_id: &str, body: Value) -> Self {
        self.responses.insert(
            tournament_id.to_string(),
            Scripted {
                body: Ok(body),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn with_delayed_body(mut self, tournament_id: &str, body: Value, delay: Duration) -> Self {
        self.responses.insert(
            tournament_id.to_string(),
            Scripted {
                body: Ok(body),
                delay,
            },
        );
        self
    }

    pub fn with_failure(mut self, tournament_id: &str, cause: UpstreamCause) -> Self {
        self.responses.insert(
            tournament_id.to_string(),
            Scripted {
                body: Err(cause),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn keys_seen(&self) -> Vec<String> {
        self.keys_seen.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChallongeApiClient for ScriptedClient {
    async fn get_participants_json(
        &self,
        tournament_id: &str,
        credential: &Credential,
    ) -> Result<Value, ProxyError> {
        self.calls.lock().unwrap().push(tournament_id.to_string());
        self.keys_seen
            .lock()
            .unwrap()
            .push(credential.as_str().to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let scripted = self.responses.get(tournament_id).cloned().unwrap_or(Scripted {
            body: Err(UpstreamCause::Status(404)),
            delay: Duration::ZERO,
        });
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        scripted
            .body
            .map_err(|cause| ProxyError::upstream(tournament_id, cause))
    }
}

/// Upstream participants body: `[{"participant": {...}}, ...]`.
pub fn participants_body(tournament_id: u64, players: &[(u64, &str)]) -> Value {
    Value::Array(
        players
            .iter()
            .map(|(id, name)| {
                json!({"participant": {
                    "id": id,
                    "name": name,
                    "tournament_id": tournament_id,
                    "seed": 1,
                }})
            })
            .collect(),
    )
}
