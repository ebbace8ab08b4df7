//! Consistency audit for recorded games.
//!
//! The audit never rejects a record on its own; it lists every invariant the
//! transcript breaks so the caller can decide whether that is fatal.
use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::outcome::{
    derive_winner, expected_knowledge, expected_mission_result, expected_vote_result,
    mission_score,
};
use crate::record::{GameRecord, Mission, QuestCard, VoteResult};
use crate::role::Role;
use crate::rules;

/// One broken invariant. Mission and proposal numbers are 1-based for display.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("config expects {expected} players but {actual} are listed")]
    PlayerCount { expected: usize, actual: usize },
    #[error("player name {name} appears more than once")]
    DuplicatePlayer { name: String },
    #[error("{name} is {role} but is_good is {recorded}")]
    TeamFlag {
        name: String,
        role: String,
        recorded: bool,
    },
    #[error("mission team sizes {recorded:?} differ from the {players}-player table {expected:?}")]
    TeamSizeTable {
        players: usize,
        expected: Vec<usize>,
        recorded: Vec<usize>,
    },
    #[error("mission in position {position} is numbered {found}")]
    MissionNumbering { position: usize, found: usize },
    #[error("mission {mission} has {count} proposals")]
    ProposalCount { mission: usize, count: usize },
    #[error("mission {mission} proposal in position {position} has id {found}")]
    ProposalNumbering {
        mission: usize,
        position: usize,
        found: usize,
    },
    #[error("mission {mission} proposal {proposal} sends {actual} players, expected {expected}")]
    TeamSize {
        mission: usize,
        proposal: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{context} names unknown player {name}")]
    UnknownPlayer { context: String, name: String },
    #[error("mission {mission} proposal {proposal} has {actual} votes, expected {expected}")]
    VoteCount {
        mission: usize,
        proposal: usize,
        expected: usize,
        actual: usize,
    },
    #[error("mission {mission} proposal {proposal} recorded {recorded}, votes imply {expected}")]
    VoteResult {
        mission: usize,
        proposal: usize,
        expected: String,
        recorded: String,
    },
    #[error("mission {mission} proposal {proposal} is approved but is not the last proposal")]
    EarlyApproval { mission: usize, proposal: usize },
    #[error("mission {mission} ends without an approved proposal")]
    NoApproval { mission: usize },
    #[error("mission {mission} final_team_index is {recorded}, expected {expected}")]
    FinalTeamIndex {
        mission: usize,
        expected: usize,
        recorded: usize,
    },
    #[error("mission {mission}: {detail}")]
    QuestActions { mission: usize, detail: String },
    #[error("mission {mission} records {recorded} fail cards but {counted} were played")]
    FailCount {
        mission: usize,
        recorded: usize,
        counted: usize,
    },
    #[error("mission {mission} recorded {recorded} but the cards imply {expected}")]
    MissionResult {
        mission: usize,
        expected: String,
        recorded: String,
    },
    #[error("good player {player} played a fail card on mission {mission}")]
    GoodPlayedFail { mission: usize, player: String },
    #[error("assassin phase present: {present}, expected: {expected}")]
    AssassinPresence { present: bool, expected: bool },
    #[error("assassin guessed {guess} but correct is recorded as {recorded}")]
    AssassinVerdict { guess: String, recorded: bool },
    #[error("{player} cannot act as assassin at this table")]
    AssassinRole { player: String },
    #[error("{player} spoke in the evil-only discussion but is not evil")]
    EvilDiscussionSpeaker { player: String },
    #[error("winner recorded as {recorded}, transcript implies {expected}")]
    Winner { expected: String, recorded: String },
    #[error("game ends before either side completes three missions")]
    Unfinished,
    #[error("{player} knowledge {recorded:?} differs from expected {expected:?}")]
    Knowledge {
        player: String,
        expected: Vec<String>,
        recorded: Vec<String>,
    },
}

/// Audit outcome for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub game_id: String,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

#[must_use]
pub fn audit_games(games: &[GameRecord]) -> Vec<AuditReport> {
    games
        .iter()
        .map(|game| AuditReport {
            game_id: game.game_id.clone(),
            violations: audit_record(game),
        })
        .collect()
}

/// Check one record against every transcript invariant.
#[must_use]
pub fn audit_record(record: &GameRecord) -> Vec<Violation> {
    let mut out = Vec::new();
    check_players(record, &mut out);
    check_team_size_table(record, &mut out);
    for (position, mission) in record.missions.iter().enumerate() {
        if mission.mission_number != position + 1 {
            out.push(Violation::MissionNumbering {
                position: position + 1,
                found: mission.mission_number,
            });
        }
        check_proposals(record, mission, &mut out);
        check_execution(record, mission, &mut out);
    }
    check_assassin(record, &mut out);
    check_winner(record, &mut out);
    check_knowledge(record, &mut out);
    out
}

fn check_players(record: &GameRecord, out: &mut Vec<Violation>) {
    if record.players.len() != record.config.num_players {
        out.push(Violation::PlayerCount {
            expected: record.config.num_players,
            actual: record.players.len(),
        });
    }
    let mut seen = HashSet::new();
    for player in &record.players {
        if !seen.insert(player.name.as_str()) {
            out.push(Violation::DuplicatePlayer {
                name: player.name.clone(),
            });
        }
        if player.is_good != player.role.is_good() {
            out.push(Violation::TeamFlag {
                name: player.name.clone(),
                role: player.role.display_name().to_string(),
                recorded: player.is_good,
            });
        }
    }
}

fn check_team_size_table(record: &GameRecord, out: &mut Vec<Violation>) {
    let Some(expected) = rules::team_sizes(record.config.num_players) else {
        return;
    };
    if record.config.mission_team_sizes.as_slice() != expected.as_slice() {
        out.push(Violation::TeamSizeTable {
            players: record.config.num_players,
            expected: expected.to_vec(),
            recorded: record.config.mission_team_sizes.clone(),
        });
    }
}

fn require_player(record: &GameRecord, name: &str, context: String, out: &mut Vec<Violation>) {
    if record.player(name).is_none() {
        out.push(Violation::UnknownPlayer {
            context,
            name: name.to_string(),
        });
    }
}

fn check_proposals(record: &GameRecord, mission: &Mission, out: &mut Vec<Violation>) {
    let number = mission.mission_number;
    let count = mission.proposals.len();
    if count == 0 || count > rules::MAX_PROPOSALS {
        out.push(Violation::ProposalCount {
            mission: number,
            count,
        });
    }
    let team_size = number
        .checked_sub(1)
        .and_then(|idx| record.config.mission_team_sizes.get(idx))
        .copied();
    let num_players = record.players.len();

    for (position, proposal) in mission.proposals.iter().enumerate() {
        let label = position + 1;
        if proposal.proposal_id != position {
            out.push(Violation::ProposalNumbering {
                mission: number,
                position: label,
                found: proposal.proposal_id,
            });
        }
        if let Some(expected) = team_size
            && proposal.team_members.len() != expected
        {
            out.push(Violation::TeamSize {
                mission: number,
                proposal: label,
                expected,
                actual: proposal.team_members.len(),
            });
        }
        require_player(
            record,
            &proposal.leader,
            format!("mission {number} proposal {label} leader"),
            out,
        );
        for member in &proposal.team_members {
            require_player(
                record,
                member,
                format!("mission {number} proposal {label} team"),
                out,
            );
        }

        let expected_votes = if rules::is_forced_proposal(position) {
            0
        } else {
            num_players
        };
        if proposal.votes.len() != expected_votes {
            out.push(Violation::VoteCount {
                mission: number,
                proposal: label,
                expected: expected_votes,
                actual: proposal.votes.len(),
            });
        }
        for vote in &proposal.votes {
            require_player(
                record,
                &vote.player,
                format!("mission {number} proposal {label} vote"),
                out,
            );
        }

        let expected = expected_vote_result(proposal, position, num_players);
        if proposal.vote_result != expected {
            out.push(Violation::VoteResult {
                mission: number,
                proposal: label,
                expected: expected.key().to_string(),
                recorded: proposal.vote_result.key().to_string(),
            });
        }
        if proposal.vote_result == VoteResult::Approved && label != count {
            out.push(Violation::EarlyApproval {
                mission: number,
                proposal: label,
            });
        }
    }

    if let Some(last) = mission.proposals.last() {
        if !last.is_approved() {
            out.push(Violation::NoApproval { mission: number });
        }
        if mission.final_team_index != count - 1 {
            out.push(Violation::FinalTeamIndex {
                mission: number,
                expected: count - 1,
                recorded: mission.final_team_index,
            });
        }
    }
}

fn check_execution(record: &GameRecord, mission: &Mission, out: &mut Vec<Violation>) {
    let number = mission.mission_number;
    let (actions, result) = match (&mission.quest_actions, mission.mission_result) {
        (None, None) => return,
        (Some(actions), Some(result)) => (actions, result),
        (Some(_), None) => {
            out.push(Violation::QuestActions {
                mission: number,
                detail: "quest actions recorded for a mission without a result".to_string(),
            });
            return;
        }
        (None, Some(_)) => {
            out.push(Violation::QuestActions {
                mission: number,
                detail: "result recorded without quest actions".to_string(),
            });
            return;
        }
    };

    if let Some(team) = mission.executed_proposal().map(|p| &p.team_members) {
        let acted: BTreeSet<&str> = actions.iter().map(|a| a.player.as_str()).collect();
        let sent: BTreeSet<&str> = team.iter().map(String::as_str).collect();
        if acted != sent || actions.len() != team.len() {
            out.push(Violation::QuestActions {
                mission: number,
                detail: format!("cards played by {acted:?} but the executed team is {sent:?}"),
            });
        }
    }

    let counted = actions
        .iter()
        .filter(|a| a.action == QuestCard::Fail)
        .count();
    if let Some(recorded) = mission.fail_count
        && recorded != counted
    {
        out.push(Violation::FailCount {
            mission: number,
            recorded,
            counted,
        });
    }
    let expected = expected_mission_result(counted);
    if result != expected {
        out.push(Violation::MissionResult {
            mission: number,
            expected: expected.key().to_string(),
            recorded: result.key().to_string(),
        });
    }
    for action in actions {
        if action.action == QuestCard::Fail
            && record.role_of(&action.player).is_some_and(Role::is_good)
        {
            out.push(Violation::GoodPlayedFail {
                mission: number,
                player: action.player.clone(),
            });
        }
    }
}

fn check_assassin(record: &GameRecord, out: &mut Vec<Violation>) {
    let score = mission_score(&record.missions);
    let expected = score.good_completed() && !score.evil_completed();
    let present = record.assassin_phase.is_some();
    if present != expected {
        out.push(Violation::AssassinPresence { present, expected });
    }
    let Some(phase) = record.assassin_phase.as_ref() else {
        return;
    };

    if let Some(merlin) = record.merlin() {
        let hit = phase.guess == merlin.name;
        if hit != phase.correct {
            out.push(Violation::AssassinVerdict {
                guess: phase.guess.clone(),
                recorded: phase.correct,
            });
        }
    }

    match record.role_of(&phase.assassin) {
        None => out.push(Violation::UnknownPlayer {
            context: "assassin phase".to_string(),
            name: phase.assassin.clone(),
        }),
        Some(role) => {
            let allowed = rules::role_setup(record.config.num_players)
                .map_or(!role.is_good(), |setup| setup.assassin_role == role);
            if !allowed {
                out.push(Violation::AssassinRole {
                    player: phase.assassin.clone(),
                });
            }
        }
    }

    let speakers: BTreeSet<&str> = phase
        .evil_discussion
        .iter()
        .map(|m| m.player.as_str())
        .collect();
    for speaker in speakers {
        if record.role_of(speaker).is_none_or(Role::is_good) {
            out.push(Violation::EvilDiscussionSpeaker {
                player: speaker.to_string(),
            });
        }
    }
}

fn check_winner(record: &GameRecord, out: &mut Vec<Violation>) {
    match derive_winner(record) {
        Some(expected) if expected != record.winner => out.push(Violation::Winner {
            expected: expected.key().to_string(),
            recorded: record.winner.key().to_string(),
        }),
        Some(_) => {}
        None => out.push(Violation::Unfinished),
    }
}

fn check_knowledge(record: &GameRecord, out: &mut Vec<Violation>) {
    for player in &record.players {
        let expected = expected_knowledge(&record.players, player);
        let recorded: BTreeSet<String> = player.special_knowledge.iter().cloned().collect();
        if expected != recorded {
            out.push(Violation::Knowledge {
                player: player.name.clone(),
                expected: expected.into_iter().collect(),
                recorded: recorded.into_iter().collect(),
            });
        }
    }
}
