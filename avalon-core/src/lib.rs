//! Avalon Replay Core
//!
//! Platform-agnostic model of recorded Avalon games: the transcript types, the
//! rules tables they were played under, outcome derivation and audit, the
//! published catalog and partition plan, and the viewer's navigation state.
//! Nothing in this crate performs I/O.

pub mod audit;
pub mod catalog;
pub mod generation;
pub mod navigation;
pub mod outcome;
pub mod partition;
pub mod record;
pub mod role;
pub mod rules;

// Re-export commonly used types
pub use audit::{AuditReport, Violation, audit_games, audit_record};
pub use catalog::{
    GameSummary, GamesFile, ReasoningLevel, TournamentGroup, TournamentInfo, group_tournaments,
};
pub use generation::{FetchGeneration, FetchTicket};
pub use navigation::{DeepLink, GameCursor, PhaseView, ViewPhase, ViewerCursor, VoteDisplay};
pub use outcome::{MissionScore, VoteTally, derive_winner, expected_knowledge, mission_score};
pub use partition::{BucketSpec, DatasetCategory, SourceShape, partition_plan};
pub use record::{
    AssassinPhase, GameConfig, GameRecord, Message, Mission, MissionResult, Player, Proposal,
    QuestAction, QuestCard, Vote, VoteChoice, VoteResult,
};
pub use role::{Role, Team};
