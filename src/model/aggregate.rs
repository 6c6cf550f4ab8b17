use crate::error::ProxyError;
use crate::model::participant::Participant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where one player name appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub tournament_id: String,
    pub player_id: String,
}

/// Cross-tournament view of players, merged by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    pub entities: BTreeMap<String, Vec<PlayerEntry>>,
    /// Distinct names in first-seen order.
    pub names: Vec<String>,
    /// Participant id to name. Ids are tournament-scoped upstream; on a collision the last one wins.
    pub player_index: BTreeMap<String, String>,
}

impl PlayerAggregate {
    fn push(mut self, id: String, name: String, tournament_id: &str) -> Self {
        let entries = self.entities.entry(name.clone()).or_insert_with(|| {
            self.names.push(name.clone());
            Vec::new()
        });
        entries.push(PlayerEntry {
            tournament_id: tournament_id.to_string(),
            player_id: id.clone(),
        });
        self.player_index.insert(id, name);
        self
    }
}

/// Folds per-tournament participant batches, in request order, into a [`PlayerAggregate`].
///
/// Names are compared byte for byte; no case or whitespace folding happens.
///
/// # Errors
///
/// Will return `Err` if any record lacks a name or an id. No partial aggregate is returned.
pub fn aggregate(batches: &[Vec<Participant>]) -> Result<PlayerAggregate, ProxyError> {
    batches
        .iter()
        .flat_map(|batch| batch.iter().enumerate())
        .try_fold(PlayerAggregate::default(), |acc, (position, participant)| {
            let malformed = |field| ProxyError::MalformedRecord {
                tournament_id: participant.tournament_id.clone(),
                field,
                position,
            };
            let name = participant.name.clone().ok_or_else(|| malformed("name"))?;
            let id = participant.id.clone().ok_or_else(|| malformed("id"))?;
            Ok(acc.push(id, name, &participant.tournament_id))
        })
}
