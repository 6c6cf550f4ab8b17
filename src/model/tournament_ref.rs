use crate::error::ProxyError;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// How a caller points at a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentRef {
    TournamentId(String),
    Named {
        subdomain: String,
        short_name: String,
    },
}

/// Raw identifier components as they arrive on a request, any of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentRefParams {
    pub tournament_id: Option<String>,
    pub subdomain: Option<String>,
    pub name: Option<String>,
}

impl TournamentRefParams {
    #[must_use]
    pub fn from_query<S: BuildHasher>(query: &HashMap<String, String, S>) -> Self {
        Self {
            tournament_id: query.get("tournament_id").cloned(),
            subdomain: query.get("subdomain").cloned(),
            name: query.get("name").cloned(),
        }
    }

    /// Picks the active representation. An explicit id wins over a named reference.
    ///
    /// # Errors
    ///
    /// Will return `Err` naming the first absent component
    pub fn into_ref(self) -> Result<TournamentRef, ProxyError> {
        if let Some(id) = non_empty(self.tournament_id) {
            return Ok(TournamentRef::TournamentId(id));
        }
        match (non_empty(self.subdomain), non_empty(self.name)) {
            (None, None) => Err(ProxyError::missing("tournament_id")),
            (None, Some(_)) => Err(ProxyError::missing("subdomain")),
            (Some(_), None) => Err(ProxyError::missing("name")),
            (Some(subdomain), Some(short_name)) => Ok(TournamentRef::Named {
                subdomain,
                short_name,
            }),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Produces the single path segment upstream expects for a tournament.
///
/// # Errors
///
/// Will return `Err` if the reference carries an empty component
pub fn resolve(tournament: &TournamentRef) -> Result<String, ProxyError> {
    match tournament {
        TournamentRef::TournamentId(id) if !id.is_empty() => Ok(id.clone()),
        TournamentRef::TournamentId(_) => Err(ProxyError::missing("tournament_id")),
        TournamentRef::Named { subdomain, .. } if subdomain.is_empty() => {
            Err(ProxyError::missing("subdomain"))
        }
        TournamentRef::Named { short_name, .. } if short_name.is_empty() => {
            Err(ProxyError::missing("name"))
        }
        TournamentRef::Named {
            subdomain,
            short_name,
        } => Ok(format!("{subdomain}-{short_name}")),
    }
}

/// Convenience for request handlers: pick the representation, then resolve it.
///
/// # Errors
///
/// Will return `Err` if neither representation is complete
pub fn resolve_params(params: TournamentRefParams) -> Result<String, ProxyError> {
    resolve(&params.into_ref()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: Option<&str>, subdomain: Option<&str>, name: Option<&str>) -> TournamentRefParams {
        TournamentRefParams {
            tournament_id: id.map(str::to_string),
            subdomain: subdomain.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn explicit_id_wins_over_named_reference() {
        let resolved = resolve_params(params(Some("555"), Some("abc"), Some("open")));
        assert_eq!(resolved, Ok("555".to_string()));
    }

    #[test]
    fn id_is_returned_unchanged() {
        for id in ["12345", "MixedCase", "abc-weekly_3"] {
            let resolved = resolve(&TournamentRef::TournamentId(id.to_string()));
            assert_eq!(resolved.as_deref(), Ok(id));
        }
    }

    #[test]
    fn named_reference_joins_with_hyphen() {
        let resolved = resolve_params(params(None, Some("abc"), Some("open")));
        assert_eq!(resolved, Ok("abc-open".to_string()));

        // no separator normalization
        let resolved = resolve_params(params(None, Some("a-b"), Some("-c")));
        assert_eq!(resolved, Ok("a-b--c".to_string()));
    }

    #[test]
    fn empty_id_falls_back_to_named_reference() {
        let resolved = resolve_params(params(Some(""), Some("abc"), Some("open")));
        assert_eq!(resolved, Ok("abc-open".to_string()));
    }

    #[test]
    fn missing_components_are_named() {
        assert_eq!(
            resolve_params(params(None, None, None)),
            Err(ProxyError::missing("tournament_id"))
        );
        assert_eq!(
            resolve_params(params(None, None, Some("open"))),
            Err(ProxyError::missing("subdomain"))
        );
        assert_eq!(
            resolve_params(params(None, Some("abc"), Some(""))),
            Err(ProxyError::missing("name"))
        );
    }

    #[test]
    fn constructed_refs_with_empty_parts_are_rejected() {
        let named = TournamentRef::Named {
            subdomain: String::new(),
            short_name: "open".to_string(),
        };
        assert_eq!(resolve(&named), Err(ProxyError::missing("subdomain")));
        assert_eq!(
            resolve(&TournamentRef::TournamentId(String::new())),
            Err(ProxyError::missing("tournament_id"))
        );
    }
}
