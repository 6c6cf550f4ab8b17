use crate::controller::challonge::FailurePolicy;
use crate::error::ProxyError;
use crate::model::{Credential, TournamentRefParams, resolve_params};
use std::collections::HashMap;
use std::hash::BuildHasher;

#[derive(Debug, Clone)]
pub struct PlayersSetRequest {
    pub tournament_ids: Vec<String>,
    pub credential: Credential,
    pub policy: FailurePolicy,
}

#[derive(Debug, Clone)]
pub struct PlayersRequest {
    pub tournament_id: String,
    pub credential: Credential,
}

fn credential_from_query<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<Credential, ProxyError> {
    query
        .get("api_key")
        .filter(|k| !k.is_empty())
        .map(Credential::new)
        .ok_or_else(|| ProxyError::missing("api_key"))
}

/// Splits the comma separated id list. Blank entries are dropped, order and duplicates kept.
#[must_use]
pub fn split_tournament_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse query parameters for the players-set endpoint.
///
/// # Errors
/// Returns an error if a required parameter is missing or the id list is too long.
pub fn parse_players_set_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    max_tournaments: usize,
) -> Result<PlayersSetRequest, ProxyError> {
    let tournament_ids = query
        .get("tournament_ids")
        .map(|raw| split_tournament_ids(raw))
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| ProxyError::missing("tournament_ids"))?;
    if tournament_ids.len() > max_tournaments {
        return Err(ProxyError::InvalidParameter {
            field: "tournament_ids",
            reason: format!(
                "{} tournaments requested, at most {max_tournaments} allowed",
                tournament_ids.len()
            ),
        });
    }
    let credential = credential_from_query(query)?;
    let policy = match query.get("partial").map(String::as_str) {
        Some("1" | "true") => FailurePolicy::Partial,
        Some("0" | "false" | "") | None => FailurePolicy::AbortAll,
        Some(other) => {
            return Err(ProxyError::InvalidParameter {
                field: "partial",
                reason: format!("expected 0 or 1, got {other:?}"),
            });
        }
    };
    Ok(PlayersSetRequest {
        tournament_ids,
        credential,
        policy,
    })
}

/// Parse query parameters for the single tournament players endpoint.
///
/// # Errors
/// Returns an error if the key or the tournament reference is missing.
pub fn parse_players_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<PlayersRequest, ProxyError> {
    let credential = credential_from_query(query)?;
    let tournament_id = resolve_params(TournamentRefParams::from_query(query))?;
    Ok(PlayersRequest {
        tournament_id,
        credential,
    })
}
