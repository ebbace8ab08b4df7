//! Recorded game transcripts as written by the game runner.
//!
//! Every type here mirrors one object in the recorded JSON. Records are read-only
//! once loaded: nothing in the workspace mutates a transcript.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::role::{Role, Team};

/// Team member names for one proposal. Teams never exceed five players.
pub type TeamMembers = SmallVec<[String; 5]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub model: String,
    /// Empty when the runner did not record it.
    #[serde(default)]
    pub reasoning_effort: String,
    pub mission_team_sizes: Vec<usize>,
    #[serde(default)]
    pub num_messages_per_player: u32,
    pub num_players: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub is_good: bool,
    #[serde(default)]
    pub special_knowledge: Vec<String>,
}

/// One line of a discussion transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub player: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub global_turn_id: u32,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub thinking_time: f64,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Approve,
    Reject,
}

impl VoteChoice {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub player: String,
    pub vote: VoteChoice,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub thinking_time: f64,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteResult {
    Approved,
    Rejected,
}

impl VoteResult {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// 0-based position within the mission.
    pub proposal_id: usize,
    pub leader: String,
    pub team_members: TeamMembers,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub thinking_time: f64,
    #[serde(default)]
    pub reasoning_content: Option<String>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    pub vote_result: VoteResult,
}

impl Proposal {
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.vote_result == VoteResult::Approved
    }

    /// Forced proposals carry no votes.
    #[must_use]
    pub fn is_auto_approved(&self) -> bool {
        self.votes.is_empty() && self.is_approved()
    }
}

/// Card a team member played during mission execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCard {
    Success,
    Fail,
}

impl QuestCard {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestAction {
    pub player: String,
    pub action: QuestCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionResult {
    Success,
    Fail,
}

impl MissionResult {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// 1-based.
    pub mission_number: usize,
    pub proposals: Vec<Proposal>,
    pub final_team_index: usize,
    #[serde(default)]
    pub discussion: Vec<Message>,
    #[serde(default)]
    pub quest_actions: Option<Vec<QuestAction>>,
    #[serde(default)]
    pub mission_result: Option<MissionResult>,
    #[serde(default)]
    pub fail_count: Option<usize>,
}

impl Mission {
    #[must_use]
    pub fn proposal(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    /// Proposal that went on the mission.
    #[must_use]
    pub fn executed_proposal(&self) -> Option<&Proposal> {
        self.proposals.get(self.final_team_index)
    }

    #[must_use]
    pub const fn was_executed(&self) -> bool {
        self.mission_result.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssassinPhase {
    pub assassin: String,
    #[serde(default)]
    pub evil_discussion: Vec<Message>,
    pub guess: String,
    #[serde(default)]
    pub reasoning: String,
    pub correct: bool,
    #[serde(default)]
    pub thinking_time: f64,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

/// One complete recorded game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub missions: Vec<Mission>,
    pub winner: Team,
    #[serde(default)]
    pub assassin_phase: Option<AssassinPhase>,
}

impl GameRecord {
    /// Parse a single recorded game.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a game record.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.player(name).map(|p| p.role)
    }

    #[must_use]
    pub fn merlin(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.role == Role::Merlin)
    }

    #[must_use]
    pub fn mission(&self, index: usize) -> Option<&Mission> {
        self.missions.get(index)
    }
}
