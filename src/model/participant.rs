use crate::error::{ProxyError, UpstreamCause};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One competitor entry in one tournament.
///
/// `id` and `name` stay optional here so that incomplete upstream records reach the
/// aggregator, which rejects them, instead of being dropped while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tournament_id: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tournament_id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            tournament_id: tournament_id.into(),
        }
    }
}

// upstream wraps every record: [{"participant": {...}}, ...]
#[derive(Deserialize)]
struct ParticipantNode {
    #[serde(default)]
    participant: Option<RawParticipant>,
}

#[derive(Deserialize, Default)]
struct RawParticipant {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    tournament_id: Option<Value>,
}

/// Upstream mixes numbers and strings for ids; everything is carried as a string.
fn scalar_to_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decodes a participants response body for `requested_id`.
///
/// # Errors
///
/// Will return `Err` if the body is not an array of participant nodes
pub fn participants_from_json(requested_id: &str, body: Value) -> Result<Vec<Participant>, ProxyError> {
    let Value::Array(nodes) = body else {
        return Err(ProxyError::upstream(
            requested_id,
            UpstreamCause::Body("expected an array of participants".to_string()),
        ));
    };

    nodes
        .into_iter()
        .map(|node| {
            let node: ParticipantNode = serde_json::from_value(node)
                .map_err(|e| ProxyError::upstream(requested_id, e.into()))?;
            let raw = node.participant.unwrap_or_default();
            Ok(Participant {
                id: scalar_to_string(raw.id),
                name: scalar_to_string(raw.name),
                tournament_id: scalar_to_string(raw.tournament_id)
                    .unwrap_or_else(|| requested_id.to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_ids_are_stringified() {
        let body = json!([
            {"participant": {"id": 11111, "name": "ebomb", "tournament_id": 12345, "seed": 1}},
            {"participant": {"id": "22222", "name": "mang0", "tournament_id": "12345"}}
        ]);
        let participants = participants_from_json("abc-open", body).unwrap();
        assert_eq!(
            participants,
            vec![
                Participant::new("11111", "ebomb", "12345"),
                Participant::new("22222", "mang0", "12345"),
            ]
        );
    }

    #[test]
    fn missing_tournament_id_uses_requested_identifier() {
        let body = json!([{"participant": {"id": 1, "name": "ebomb"}}]);
        let participants = participants_from_json("abc-open", body).unwrap();
        assert_eq!(participants[0].tournament_id, "abc-open");
    }

    #[test]
    fn incomplete_records_are_kept_for_the_aggregator() {
        let body = json!([{"participant": {"id": 1, "name": null}}, {}]);
        let participants = participants_from_json("100", body).unwrap();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].name, None);
        assert_eq!(participants[1].id, None);
    }

    #[test]
    fn non_array_body_is_an_upstream_failure() {
        let err = participants_from_json("100", json!({"errors": ["Not found"]})).unwrap_err();
        assert!(matches!(
            err,
            ProxyError::UpstreamFailure { ref tournament_id, cause: UpstreamCause::Body(_) }
                if tournament_id == "100"
        ));
    }
}
