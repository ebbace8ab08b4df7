//! Published artifacts: the tournament manifest, per-tournament game index and
//! the `all_games.json` envelope.
use serde::{Deserialize, Serialize};

use crate::role::Team;

/// Reasoning effort the recorded agents were configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningLevel {
    Low,
    Medium,
    High,
}

impl ReasoningLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ReasoningLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One entry of a tournament's `index.json`. Position in the array is the
/// game's display position. `winner` is null for games that never finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: String,
    pub winner: Option<Team>,
    pub players: usize,
}

/// Envelope of `all_games.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesFile<T> {
    pub games: Vec<T>,
}

/// One entry of `tournaments.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentInfo {
    pub name: String,
    /// Relative to the data root, e.g. `datasets/A_cross_game_learning`.
    pub path: String,
    pub players: usize,
    pub games: usize,
    pub reasoning: ReasoningLevel,
    #[serde(rename = "hasMemory")]
    pub has_memory: bool,
}

impl TournamentInfo {
    #[must_use]
    pub fn index_path(&self) -> String {
        format!("{}/index.json", self.path)
    }

    #[must_use]
    pub fn games_path(&self) -> String {
        format!("{}/all_games.json", self.path)
    }

    /// Sidebar label: the part of the name after the dataset prefix, or a
    /// compact summary for names without one.
    #[must_use]
    pub fn short_label(&self) -> String {
        if let Some((_, rest)) = self.name.split_once(": ") {
            return rest.to_string();
        }
        let memory = if self.has_memory { " · mem" } else { "" };
        format!(
            "{players}p · {games}g · {reasoning}{memory}",
            players = self.players,
            games = self.games,
            reasoning = self.reasoning
        )
    }

    /// Compact summary used as the heading of a selected tournament.
    #[must_use]
    pub fn stats_label(&self) -> String {
        let memory = if self.has_memory { " · mem" } else { "" };
        format!(
            "{}p · {}g · {}{memory}",
            self.players, self.games, self.reasoning
        )
    }

    #[must_use]
    pub fn group(&self) -> TournamentGroup {
        TournamentGroup::for_name(&self.name)
    }
}

/// Sidebar section a tournament is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TournamentGroup {
    CrossGameLearning,
    MemoryTournaments,
    IndividualGames,
    ReasoningComparison,
    Other,
}

impl TournamentGroup {
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name.split_once(':').map(|(prefix, _)| prefix) {
            Some("A") => Self::CrossGameLearning,
            Some("B") => Self::MemoryTournaments,
            Some("C") => Self::IndividualGames,
            Some("D") => Self::ReasoningComparison,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CrossGameLearning => "A: Cross-Game Learning",
            Self::MemoryTournaments => "B: Tournaments (Memory)",
            Self::IndividualGames => "C: Individual Games (No Memory)",
            Self::ReasoningComparison => "D: Reasoning Comparison",
            Self::Other => "Tournaments",
        }
    }
}

/// Manifest entries grouped for the sidebar, keeping each entry's manifest
/// index. Groups appear in order of first appearance.
#[must_use]
pub fn group_tournaments(
    manifest: &[TournamentInfo],
) -> Vec<(TournamentGroup, Vec<(usize, &TournamentInfo)>)> {
    let mut groups: Vec<(TournamentGroup, Vec<(usize, &TournamentInfo)>)> = Vec::new();
    for (idx, info) in manifest.iter().enumerate() {
        let group = info.group();
        match groups.iter_mut().find(|(g, _)| *g == group) {
            Some((_, members)) => members.push((idx, info)),
            None => groups.push((group, vec![(idx, info)])),
        }
    }
    groups
}
