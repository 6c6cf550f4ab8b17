use std::sync::Arc;

use crate::controller::challonge::{ChallongeApiClient, FetchSettings};

/// Shared by every worker; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ChallongeApiClient>,
    pub fetch: FetchSettings,
}

impl AppState {
    pub fn new(api: Arc<dyn ChallongeApiClient>, fetch: FetchSettings) -> Self {
        Self { api, fetch }
    }
}
