pub mod aggregate;
pub mod participant;
pub mod tournament_ref;

use std::fmt;

pub use aggregate::{PlayerAggregate, PlayerEntry, aggregate};
pub use participant::{Participant, participants_from_json};
pub use tournament_ref::{TournamentRef, TournamentRefParams, resolve, resolve_params};

/// Upstream API key. Passed through untouched and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
