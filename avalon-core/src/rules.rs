//! Table rules the recorded games were played under.
use crate::role::Role::{
    self, Assassin, LoyalServant, Merlin, Minion, Mordred, Morgana, Oberon, Percival,
};

pub const MIN_PLAYERS: usize = 5;
pub const MAX_PLAYERS: usize = 10;
pub const MISSION_COUNT: usize = 5;
/// Proposals allowed per mission; the last one skips the vote.
pub const MAX_PROPOSALS: usize = 5;
/// Missions a side must take to end the game.
pub const MISSIONS_TO_WIN: usize = 3;

static TEAM_SIZES: [[usize; MISSION_COUNT]; 6] = [
    [2, 3, 2, 3, 3],
    [2, 3, 4, 3, 4],
    [2, 3, 3, 4, 4],
    [3, 4, 4, 5, 5],
    [3, 4, 4, 5, 5],
    [3, 4, 4, 5, 5],
];

const SETUP_5: [Role; 5] = [Merlin, LoyalServant, LoyalServant, Assassin, Minion];
const SETUP_6: [Role; 6] = [Merlin, Percival, LoyalServant, LoyalServant, Morgana, Mordred];
const SETUP_7: [Role; 7] = [
    Merlin,
    Percival,
    LoyalServant,
    LoyalServant,
    Morgana,
    Mordred,
    Oberon,
];
const SETUP_8: [Role; 8] = [
    Merlin,
    Percival,
    LoyalServant,
    LoyalServant,
    LoyalServant,
    Morgana,
    Mordred,
    Assassin,
];
const SETUP_9: [Role; 9] = [
    Merlin,
    Percival,
    LoyalServant,
    LoyalServant,
    LoyalServant,
    LoyalServant,
    Morgana,
    Mordred,
    Assassin,
];
const SETUP_10: [Role; 10] = [
    Merlin,
    Percival,
    LoyalServant,
    LoyalServant,
    LoyalServant,
    LoyalServant,
    Morgana,
    Mordred,
    Oberon,
    Assassin,
];

/// Roles dealt at a given table size and the role that performs the assassination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSetup {
    pub roles: &'static [Role],
    /// Smaller tables have no dedicated assassin, so another evil role doubles up.
    pub assassin_role: Role,
}

impl RoleSetup {
    #[must_use]
    pub fn good_count(&self) -> usize {
        self.roles.iter().filter(|role| role.is_good()).count()
    }

    #[must_use]
    pub fn evil_count(&self) -> usize {
        self.roles.len() - self.good_count()
    }
}

/// Team size per mission (0-based mission index) for a table size.
#[must_use]
pub fn team_sizes(num_players: usize) -> Option<&'static [usize; MISSION_COUNT]> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        TEAM_SIZES.get(num_players - MIN_PLAYERS)
    } else {
        None
    }
}

#[must_use]
pub const fn role_setup(num_players: usize) -> Option<RoleSetup> {
    let (roles, assassin_role): (&'static [Role], Role) = match num_players {
        5 => (&SETUP_5, Assassin),
        6 => (&SETUP_6, Mordred),
        7 => (&SETUP_7, Morgana),
        8 => (&SETUP_8, Assassin),
        9 => (&SETUP_9, Assassin),
        10 => (&SETUP_10, Assassin),
        _ => return None,
    };
    Some(RoleSetup {
        roles,
        assassin_role,
    })
}

/// Approvals a voted proposal needs to exceed: a strict majority of the table.
#[must_use]
pub const fn approval_threshold(num_players: usize) -> usize {
    num_players / 2
}

/// Whether the proposal at `position` (0-based within its mission) skips the vote.
#[must_use]
pub const fn is_forced_proposal(position: usize) -> bool {
    position + 1 == MAX_PROPOSALS
}
