//! Viewer navigation: which tournament, game, mission, phase and proposal the
//! user is looking at, and the slice of the record each state shows.
//!
//! Transitions take the record they navigate so that every cursor stays inside
//! it; a rejected transition leaves the cursor untouched and returns `false`.
use serde::{Deserialize, Serialize};

use crate::record::{AssassinPhase, GameRecord, Message, Mission, Proposal, Vote};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    #[default]
    Overview,
    Discussion,
    Proposal,
    Voting,
    Execution,
    Assassin,
}

impl ViewPhase {
    /// Tabs shown while a mission is selected, in display order.
    pub const MISSION_TABS: [Self; 4] = [
        Self::Discussion,
        Self::Proposal,
        Self::Voting,
        Self::Execution,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Discussion => "discussion",
            Self::Proposal => "proposal",
            Self::Voting => "voting",
            Self::Execution => "execution",
            Self::Assassin => "assassin",
        }
    }

    #[must_use]
    pub const fn is_mission_phase(self) -> bool {
        matches!(
            self,
            Self::Discussion | Self::Proposal | Self::Voting | Self::Execution
        )
    }

    /// Phases that show a proposal picker.
    #[must_use]
    pub const fn picks_proposal(self) -> bool {
        matches!(self, Self::Proposal | Self::Voting)
    }
}

/// Position inside one loaded game. A fresh cursor is the overview of
/// mission 0, proposal 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCursor {
    pub phase: ViewPhase,
    pub mission: usize,
    pub proposal: usize,
}

impl GameCursor {
    /// Jump to a mission's discussion, resetting the proposal cursor.
    pub fn select_mission(&mut self, record: &GameRecord, mission: usize) -> bool {
        if mission >= record.missions.len() {
            return false;
        }
        self.phase = ViewPhase::Discussion;
        self.mission = mission;
        self.proposal = 0;
        true
    }

    /// Switch between the mission tabs. Only valid while a mission tab is shown.
    pub fn select_phase(&mut self, phase: ViewPhase) -> bool {
        if !self.phase.is_mission_phase() || !phase.is_mission_phase() {
            return false;
        }
        self.phase = phase;
        true
    }

    pub fn select_assassin(&mut self, record: &GameRecord) -> bool {
        if record.assassin_phase.is_none() {
            return false;
        }
        self.phase = ViewPhase::Assassin;
        true
    }

    pub fn select_proposal(&mut self, record: &GameRecord, proposal: usize) -> bool {
        if !self.phase.picks_proposal() {
            return false;
        }
        let in_range = record
            .mission(self.mission)
            .is_some_and(|m| proposal < m.proposals.len());
        if !in_range {
            return false;
        }
        self.proposal = proposal;
        true
    }

    #[must_use]
    pub const fn phase_tabs_visible(&self) -> bool {
        self.phase.is_mission_phase()
    }

    #[must_use]
    pub fn view<'a>(&self, record: &'a GameRecord) -> PhaseView<'a> {
        if self.phase == ViewPhase::Overview {
            return PhaseView::Overview;
        }
        if self.phase == ViewPhase::Assassin {
            return record
                .assassin_phase
                .as_ref()
                .map_or(PhaseView::Unavailable, PhaseView::Assassin);
        }
        let Some(mission) = record.mission(self.mission) else {
            return PhaseView::Unavailable;
        };
        match self.phase {
            ViewPhase::Discussion => PhaseView::Discussion {
                mission,
                messages: &mission.discussion,
            },
            ViewPhase::Execution => PhaseView::Execution { mission },
            ViewPhase::Proposal | ViewPhase::Voting => {
                let Some(proposal) = mission.proposal(self.proposal) else {
                    return PhaseView::Unavailable;
                };
                if self.phase == ViewPhase::Proposal {
                    PhaseView::Proposal {
                        mission,
                        proposal,
                        selected: self.proposal,
                    }
                } else {
                    let votes = if proposal.votes.is_empty() {
                        VoteDisplay::AutoApproved
                    } else {
                        VoteDisplay::Cast(&proposal.votes)
                    };
                    PhaseView::Voting {
                        mission,
                        proposal,
                        selected: self.proposal,
                        votes,
                    }
                }
            }
            ViewPhase::Overview | ViewPhase::Assassin => PhaseView::Unavailable,
        }
    }
}

/// What the content pane shows for the current cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseView<'a> {
    Overview,
    Discussion {
        mission: &'a Mission,
        messages: &'a [Message],
    },
    Proposal {
        mission: &'a Mission,
        proposal: &'a Proposal,
        selected: usize,
    },
    Voting {
        mission: &'a Mission,
        proposal: &'a Proposal,
        selected: usize,
        votes: VoteDisplay<'a>,
    },
    Execution {
        mission: &'a Mission,
    },
    Assassin(&'a AssassinPhase),
    /// The cursor points outside the record.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoteDisplay<'a> {
    /// Forced proposal: nobody voted.
    AutoApproved,
    Cast(&'a [Vote]),
}

/// Whole-viewer selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerCursor {
    pub tournament: Option<usize>,
    pub game: Option<usize>,
    pub game_view: GameCursor,
}

impl ViewerCursor {
    pub fn select_tournament(&mut self, tournament: usize) {
        self.tournament = Some(tournament);
        self.game = None;
        self.game_view = GameCursor::default();
    }

    /// Back to the tournament list.
    pub fn clear_tournament(&mut self) {
        *self = Self::default();
    }

    pub fn select_game(&mut self, game: usize) {
        self.game = Some(game);
        self.game_view = GameCursor::default();
    }

    #[must_use]
    pub const fn deep_link(&self) -> DeepLink {
        DeepLink {
            tournament: self.tournament,
            game: self.game,
        }
    }
}

/// `?tournament=<i>&game=<j>` query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLink {
    pub tournament: Option<usize>,
    pub game: Option<usize>,
}

impl DeepLink {
    /// Parse a URL query. Unknown keys are ignored and values that are not
    /// non-negative integers read as absent; the first occurrence of a key wins.
    #[must_use]
    pub fn from_query_str(query: &str) -> Self {
        let mut link = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match key {
                "tournament" => &mut link.tournament,
                "game" => &mut link.game,
                _ => continue,
            };
            if slot.is_none() {
                *slot = value.trim().parse().ok();
            }
        }
        link
    }

    /// Render as a query string with its leading `?`, or an empty string when
    /// nothing is selected.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(t) = self.tournament {
            parts.push(format!("tournament={t}"));
        }
        if let Some(g) = self.game {
            parts.push(format!("game={g}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tournament.is_none() && self.game.is_none()
    }

    /// Requested tournament, if it exists in a manifest of `len` entries.
    #[must_use]
    pub fn tournament_within(&self, len: usize) -> Option<usize> {
        self.tournament.filter(|&idx| idx < len)
    }

    /// Requested game, if it exists in an index of `len` entries.
    #[must_use]
    pub fn game_within(&self, len: usize) -> Option<usize> {
        self.game.filter(|&idx| idx < len)
    }
}
