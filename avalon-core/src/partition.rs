//! Partition plan: how upstream dataset categories map onto published
//! tournament buckets. The plan is pure data; reading and writing files is the
//! job of the `avalon-prep` tool.
use crate::catalog::{ReasoningLevel, TournamentInfo};

/// Table sizes the per-player-count categories are split by, in emission order.
pub const PLAYER_COUNT_LABELS: [&str; 6] = ["5p", "6p", "7p", "8p", "9p", "10p"];

/// Player count assumed for records that omit their player list.
pub const DEFAULT_PLAYERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetCategory {
    CrossGameLearning,
    TournamentsByPlayerCount,
    IndividualGamesByPlayerCount,
    ReasoningComparison,
}

impl DatasetCategory {
    /// Categories in the order their buckets are published.
    pub const ALL: [Self; 4] = [
        Self::CrossGameLearning,
        Self::TournamentsByPlayerCount,
        Self::IndividualGamesByPlayerCount,
        Self::ReasoningComparison,
    ];

    /// Directory under the dataset root.
    #[must_use]
    pub const fn upstream_dir(self) -> &'static str {
        match self {
            Self::CrossGameLearning => "1_cross_game_learning_50g",
            Self::TournamentsByPlayerCount => "2_tournaments_by_player_count",
            Self::IndividualGamesByPlayerCount => "3_individual_games_by_player_count",
            Self::ReasoningComparison => "4_reasoning_comparison",
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::CrossGameLearning => 'A',
            Self::TournamentsByPlayerCount => 'B',
            Self::IndividualGamesByPlayerCount => 'C',
            Self::ReasoningComparison => 'D',
        }
    }

    #[must_use]
    pub const fn source_shape(self) -> SourceShape {
        match self {
            Self::IndividualGamesByPlayerCount => SourceShape::PerGameFiles,
            _ => SourceShape::Aggregate,
        }
    }

    /// Whether agents in this category carried memory between games.
    #[must_use]
    pub const fn has_memory(self) -> bool {
        !matches!(self, Self::IndividualGamesByPlayerCount)
    }
}

/// How games are stored inside one sub-partition directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    /// A single `all_games.json` holding `{"games": [...]}`.
    Aggregate,
    /// One game per `*.json` file.
    PerGameFiles,
}

/// Name of the aggregate file inside a sub-partition, and of the published
/// full-record artifact.
pub const AGGREGATE_FILE: &str = "all_games.json";
pub const INDEX_FILE: &str = "index.json";
pub const MANIFEST_FILE: &str = "tournaments.json";

/// One published bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSpec {
    pub category: DatasetCategory,
    /// Sub-partition label (`5p`, `low`, ...) or `None` for unsplit categories.
    pub partition: Option<&'static str>,
    /// Directory holding the source files, relative to the dataset root.
    pub source_dir: String,
    /// Output directory, relative to the data root.
    pub output_path: String,
    pub fallback_players: usize,
    pub reasoning: ReasoningLevel,
    pub has_memory: bool,
}

impl BucketSpec {
    #[must_use]
    pub const fn source_shape(&self) -> SourceShape {
        self.category.source_shape()
    }

    /// Manifest name for a bucket holding `games` games.
    #[must_use]
    pub fn tournament_name(&self, games: usize) -> String {
        let label = self.partition.unwrap_or_default();
        match self.category {
            DatasetCategory::CrossGameLearning => {
                format!("A: Cross-Game Learning ({games} games)")
            }
            DatasetCategory::TournamentsByPlayerCount => {
                format!("B: Tournament {label} ({games} games)")
            }
            DatasetCategory::IndividualGamesByPlayerCount => {
                format!("C: Individual {label} ({games} games)")
            }
            DatasetCategory::ReasoningComparison => {
                format!("D: Reasoning {label} ({games} games)")
            }
        }
    }

    #[must_use]
    pub fn tournament_info(&self, games: usize) -> TournamentInfo {
        TournamentInfo {
            name: self.tournament_name(games),
            path: self.output_path.clone(),
            players: self.fallback_players,
            games,
            reasoning: self.reasoning,
            has_memory: self.has_memory,
        }
    }
}

/// Parse a `5p`-style directory label into a player count.
#[must_use]
pub fn players_from_label(label: &str) -> Option<usize> {
    label.strip_suffix('p')?.parse().ok()
}

fn player_count_buckets(category: DatasetCategory, output_prefix: &str) -> Vec<BucketSpec> {
    PLAYER_COUNT_LABELS
        .iter()
        .map(|label| BucketSpec {
            category,
            partition: Some(label),
            source_dir: format!("{}/{label}", category.upstream_dir()),
            output_path: format!("datasets/{output_prefix}_{label}"),
            fallback_players: players_from_label(label).unwrap_or(DEFAULT_PLAYERS),
            reasoning: ReasoningLevel::Low,
            has_memory: category.has_memory(),
        })
        .collect()
}

/// Every bucket in publication order: category order first, then ascending
/// player count or low → medium → high reasoning inside a category.
#[must_use]
pub fn partition_plan() -> Vec<BucketSpec> {
    let mut plan = Vec::new();
    for category in DatasetCategory::ALL {
        match category {
            DatasetCategory::CrossGameLearning => plan.push(BucketSpec {
                category,
                partition: None,
                source_dir: category.upstream_dir().to_string(),
                output_path: "datasets/A_cross_game_learning".to_string(),
                fallback_players: DEFAULT_PLAYERS,
                reasoning: ReasoningLevel::Low,
                has_memory: true,
            }),
            DatasetCategory::TournamentsByPlayerCount => {
                plan.extend(player_count_buckets(category, "B_tournament"));
            }
            DatasetCategory::IndividualGamesByPlayerCount => {
                plan.extend(player_count_buckets(category, "C_individual"));
            }
            DatasetCategory::ReasoningComparison => {
                plan.extend(ReasoningLevel::ALL.into_iter().map(|level| BucketSpec {
                    category,
                    partition: Some(level.key()),
                    source_dir: format!("{}/{}", category.upstream_dir(), level.key()),
                    output_path: format!("datasets/D_reasoning_{}", level.key()),
                    fallback_players: DEFAULT_PLAYERS,
                    reasoning: level,
                    has_memory: true,
                }));
            }
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_emits_buckets_in_fixed_order() {
        let plan = partition_plan();
        assert_eq!(plan.len(), 1 + 6 + 6 + 3);
        let paths: Vec<_> = plan.iter().map(|b| b.output_path.as_str()).collect();
        assert_eq!(paths[0], "datasets/A_cross_game_learning");
        assert_eq!(paths[1], "datasets/B_tournament_5p");
        assert_eq!(paths[6], "datasets/B_tournament_10p");
        assert_eq!(paths[7], "datasets/C_individual_5p");
        assert_eq!(
            &paths[13..],
            [
                "datasets/D_reasoning_low",
                "datasets/D_reasoning_medium",
                "datasets/D_reasoning_high"
            ]
        );
    }

    #[test]
    fn bucket_metadata_follows_category() {
        let plan = partition_plan();
        let individual = &plan[9];
        assert_eq!(individual.source_dir, "3_individual_games_by_player_count/7p");
        assert_eq!(individual.fallback_players, 7);
        assert!(!individual.has_memory);
        assert_eq!(individual.source_shape(), SourceShape::PerGameFiles);
        assert_eq!(individual.tournament_name(10), "C: Individual 7p (10 games)");

        let high = &plan[15];
        assert_eq!(high.reasoning, ReasoningLevel::High);
        assert_eq!(high.fallback_players, 5);
        assert_eq!(high.tournament_name(6), "D: Reasoning high (6 games)");

        let info = plan[0].tournament_info(50);
        assert_eq!(info.name, "A: Cross-Game Learning (50 games)");
        assert_eq!(info.games, 50);
        assert!(info.has_memory);
    }

    #[test]
    fn player_labels_parse() {
        assert_eq!(players_from_label("10p"), Some(10));
        assert_eq!(players_from_label("p"), None);
        assert_eq!(players_from_label("low"), None);
    }
}
