use avalon_core::{GameRecord, GameSummary, Team};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Outcome counts for the games in one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub games: usize,
    pub good_wins: usize,
    pub evil_wins: usize,
    /// Games published with a null winner.
    pub undecided: usize,
    pub assassin_attempts: usize,
    pub assassin_hits: usize,
}

impl BucketStats {
    pub fn record(&mut self, summary: &GameSummary, record: Option<&GameRecord>) {
        self.games += 1;
        match summary.winner {
            Some(Team::Good) => self.good_wins += 1,
            Some(Team::Evil) => self.evil_wins += 1,
            None => self.undecided += 1,
        }
        if let Some(phase) = record.and_then(|r| r.assassin_phase.as_ref()) {
            self.assassin_attempts += 1;
            if phase.correct {
                self.assassin_hits += 1;
            }
        }
    }

    pub fn merge(&mut self, other: &Self) {
        self.games += other.games;
        self.good_wins += other.good_wins;
        self.evil_wins += other.evil_wins;
        self.undecided += other.undecided;
        self.assassin_attempts += other.assassin_attempts;
        self.assassin_hits += other.assassin_hits;
    }

    #[must_use]
    pub fn good_win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.good_wins as f64 / self.games as f64;
        rate * 100.0
    }
}

/// Lowercase hex SHA-256 of a published artifact.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
