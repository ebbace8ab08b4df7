use avalon_core::{GameRecord, GameSummary, Team, Violation, audit_record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Audit problem attached to one published game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Finding {
    Violations {
        game_id: String,
        violations: Vec<Violation>,
    },
    /// The record is listed but does not parse as a full transcript.
    Unreadable { game_id: String, error: String },
}

impl Finding {
    #[must_use]
    pub fn game_id(&self) -> &str {
        match self {
            Self::Violations { game_id, .. } | Self::Unreadable { game_id, .. } => game_id,
        }
    }

    /// One line per problem, for human-readable reports.
    #[must_use]
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Violations { violations, .. } => {
                violations.iter().map(ToString::to_string).collect()
            }
            Self::Unreadable { error, .. } => vec![format!("unreadable transcript: {error}")],
        }
    }
}

#[derive(Debug)]
pub struct InspectedGame {
    pub summary: GameSummary,
    pub record: Option<GameRecord>,
    pub finding: Option<Finding>,
}

/// Build the index entry for one recorded game and audit its transcript.
///
/// Every game gets an entry. Fields the index needs are read leniently: a
/// missing `game_id` becomes an empty id, and a winner other than
/// `good`/`evil` (null for unfinished games) is published as null. Such
/// records fail the full transcript parse and carry an `Unreadable` finding.
#[must_use]
pub fn inspect_game(game: &Value, fallback_players: usize) -> InspectedGame {
    let listed = game
        .get("players")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let summary = GameSummary {
        id: game
            .get("game_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        winner: game
            .get("winner")
            .and_then(|winner| Team::deserialize(winner).ok()),
        players: if listed == 0 { fallback_players } else { listed },
    };

    let (record, finding) = match GameRecord::deserialize(game) {
        Ok(record) => {
            let violations = audit_record(&record);
            let finding = (!violations.is_empty()).then(|| Finding::Violations {
                game_id: summary.id.clone(),
                violations,
            });
            (Some(record), finding)
        }
        Err(err) => (
            None,
            Some(Finding::Unreadable {
                game_id: summary.id.clone(),
                error: err.to_string(),
            }),
        ),
    };
    InspectedGame {
        summary,
        record,
        finding,
    }
}
