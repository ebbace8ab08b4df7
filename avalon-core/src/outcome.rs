//! Outcomes implied by a transcript: vote results, mission score, winner and
//! the knowledge each role starts with.
use std::collections::BTreeSet;

use crate::record::{GameRecord, Mission, MissionResult, Player, Proposal, VoteChoice, VoteResult};
use crate::role::{Role, Team};
use crate::rules;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub approve: usize,
    pub reject: usize,
}

#[must_use]
pub fn tally(proposal: &Proposal) -> VoteTally {
    proposal
        .votes
        .iter()
        .fold(VoteTally::default(), |mut acc, vote| {
            match vote.vote {
                VoteChoice::Approve => acc.approve += 1,
                VoteChoice::Reject => acc.reject += 1,
            }
            acc
        })
}

/// Result the vote rule implies for the proposal at `position` in its mission.
///
/// With one vote per player, "approvals exceed half the table" and "more
/// approvals than rejections" are the same condition.
#[must_use]
pub fn expected_vote_result(proposal: &Proposal, position: usize, num_players: usize) -> VoteResult {
    if rules::is_forced_proposal(position) {
        return VoteResult::Approved;
    }
    if tally(proposal).approve > rules::approval_threshold(num_players) {
        VoteResult::Approved
    } else {
        VoteResult::Rejected
    }
}

/// Result a set of played cards implies: one fail card sinks the mission.
#[must_use]
pub fn expected_mission_result(fail_count: usize) -> MissionResult {
    if fail_count > 0 {
        MissionResult::Fail
    } else {
        MissionResult::Success
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionScore {
    pub successes: usize,
    pub fails: usize,
}

impl MissionScore {
    #[must_use]
    pub const fn good_completed(&self) -> bool {
        self.successes >= rules::MISSIONS_TO_WIN
    }

    #[must_use]
    pub const fn evil_completed(&self) -> bool {
        self.fails >= rules::MISSIONS_TO_WIN
    }
}

#[must_use]
pub fn mission_score(missions: &[Mission]) -> MissionScore {
    missions
        .iter()
        .filter_map(|m| m.mission_result)
        .fold(MissionScore::default(), |mut score, result| {
            match result {
                MissionResult::Success => score.successes += 1,
                MissionResult::Fail => score.fails += 1,
            }
            score
        })
}

/// Winner implied by mission outcomes and the assassin verdict.
///
/// Returns `None` for a transcript where neither side reached the mission target.
#[must_use]
pub fn derive_winner(record: &GameRecord) -> Option<Team> {
    let score = mission_score(&record.missions);
    if score.evil_completed() {
        return Some(Team::Evil);
    }
    if !score.good_completed() {
        return None;
    }
    match &record.assassin_phase {
        Some(phase) if phase.correct => Some(Team::Evil),
        _ => Some(Team::Good),
    }
}

/// Whether the recorded guess names the player holding Merlin.
#[must_use]
pub fn guess_hits_merlin(record: &GameRecord) -> Option<bool> {
    let phase = record.assassin_phase.as_ref()?;
    let merlin = record.merlin()?;
    Some(phase.guess == merlin.name)
}

fn names_where(players: &[Player], mut keep: impl FnMut(&Player) -> bool) -> BTreeSet<String> {
    players
        .iter()
        .filter(|&p| keep(p))
        .map(|p| p.name.clone())
        .collect()
}

/// Names a player is told at setup, as a set.
#[must_use]
pub fn expected_knowledge(players: &[Player], player: &Player) -> BTreeSet<String> {
    match player.role {
        Role::Merlin => names_where(players, |p| !p.role.is_good() && p.role != Role::Mordred),
        Role::Percival => {
            let morgana_present = players.iter().any(|p| p.role == Role::Morgana);
            names_where(players, move |p| {
                p.role == Role::Merlin || (morgana_present && p.role == Role::Morgana)
            })
        }
        Role::Assassin | Role::Morgana | Role::Mordred | Role::Minion => {
            let own = player.name.clone();
            names_where(players, move |p| {
                !p.role.is_good() && p.role != Role::Oberon && p.name != own
            })
        }
        Role::Oberon | Role::LoyalServant => BTreeSet::new(),
    }
}
