//! Character roles and the fixed role-to-team mapping.
use serde::{Deserialize, Serialize};

/// Side a player fights for. Also used as the recorded winner of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Good,
    Evil,
}

impl Team {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Evil => "evil",
        }
    }

    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the eight character roles a player can be dealt.
///
/// Wire names follow the recorded game files: the plain servant of Arthur is
/// stored as `good` and the plain minion of Mordred as `evil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Merlin,
    Percival,
    #[serde(rename = "good")]
    LoyalServant,
    Assassin,
    Morgana,
    Mordred,
    Oberon,
    #[serde(rename = "evil")]
    Minion,
}

impl Role {
    pub const ALL: [Self; 8] = [
        Self::Merlin,
        Self::Percival,
        Self::LoyalServant,
        Self::Assassin,
        Self::Morgana,
        Self::Mordred,
        Self::Oberon,
        Self::Minion,
    ];

    /// Team this role belongs to. Total over all roles.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Self::Merlin | Self::Percival | Self::LoyalServant => Team::Good,
            Self::Assassin | Self::Morgana | Self::Mordred | Self::Oberon | Self::Minion => {
                Team::Evil
            }
        }
    }

    #[must_use]
    pub const fn is_good(self) -> bool {
        self.team().is_good()
    }

    /// Name as stored in recorded games.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Merlin => "merlin",
            Self::Percival => "percival",
            Self::LoyalServant => "good",
            Self::Assassin => "assassin",
            Self::Morgana => "morgana",
            Self::Mordred => "mordred",
            Self::Oberon => "oberon",
            Self::Minion => "evil",
        }
    }

    /// Human-facing character name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Merlin => "Merlin",
            Self::Percival => "Percival",
            Self::LoyalServant => "Loyal Servant",
            Self::Assassin => "Assassin",
            Self::Morgana => "Morgana",
            Self::Mordred => "Mordred",
            Self::Oberon => "Oberon",
            Self::Minion => "Minion",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
