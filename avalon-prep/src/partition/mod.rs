//! Build the published data tree from an upstream dataset.
//!
//! The output directory is removed and rebuilt on every run. Buckets are
//! written in plan order and each bucket's games keep their source order, so
//! identical input produces identical bytes.
pub mod inspect;
pub mod source;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use avalon_core::partition::{AGGREGATE_FILE, BucketSpec, INDEX_FILE, MANIFEST_FILE};
use avalon_core::{TournamentInfo, partition_plan};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::stats::{BucketStats, sha256_hex};
pub use inspect::Finding;
use source::{BucketSource, LoadedBucket, SkipReason};

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} has no \"games\" array", .path.display())]
    MissingGames { path: PathBuf },
    #[error("failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One bucket that was written.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedBucket {
    #[serde(flatten)]
    pub info: TournamentInfo,
    pub stats: BucketStats,
    /// SHA-256 of the published `all_games.json`.
    pub digest: String,
    pub findings: Vec<Finding>,
}

/// One planned bucket with no source data.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedBucket {
    pub path: String,
    pub source_dir: String,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PartitionSummary {
    pub buckets: Vec<PublishedBucket>,
    pub skipped: Vec<SkippedBucket>,
}

impl PartitionSummary {
    #[must_use]
    pub fn manifest(&self) -> Vec<TournamentInfo> {
        self.buckets.iter().map(|b| b.info.clone()).collect()
    }

    #[must_use]
    pub fn totals(&self) -> BucketStats {
        let mut totals = BucketStats::default();
        for bucket in &self.buckets {
            totals.merge(&bucket.stats);
        }
        totals
    }

    pub fn findings(&self) -> impl Iterator<Item = (&PublishedBucket, &Finding)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.findings.iter().map(move |f| (bucket, f)))
    }

    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.findings().next().is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Partitioner {
    dataset: PathBuf,
    output: PathBuf,
}

impl Partitioner {
    #[must_use]
    pub fn new(dataset: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            output: output.into(),
        }
    }

    /// Rebuild the output tree.
    ///
    /// # Errors
    ///
    /// Any I/O failure or malformed input file aborts the run. Buckets written
    /// before the failure stay on disk but no manifest is written.
    pub fn run(&self) -> Result<PartitionSummary, PartitionError> {
        reset_dir(&self.output)?;
        let mut summary = PartitionSummary::default();
        for spec in partition_plan() {
            match source::load_bucket(&self.dataset, &spec)? {
                BucketSource::Skipped(reason) => {
                    warn!("skipping {}: {}", spec.source_dir, reason.describe());
                    summary.skipped.push(skipped(&spec, reason));
                }
                BucketSource::Loaded(loaded) => {
                    let bucket = self.publish(&spec, &loaded)?;
                    info!(
                        "{} -> {} ({} games)",
                        spec.source_dir, spec.output_path, bucket.info.games
                    );
                    summary.buckets.push(bucket);
                }
            }
        }
        write_json(&self.output.join(MANIFEST_FILE), &summary.manifest())?;
        info!(
            "wrote {} with {} entries",
            MANIFEST_FILE,
            summary.buckets.len()
        );
        Ok(summary)
    }

    fn publish(
        &self,
        spec: &BucketSpec,
        loaded: &LoadedBucket,
    ) -> Result<PublishedBucket, PartitionError> {
        let mut index = Vec::with_capacity(loaded.games().len());
        let mut stats = BucketStats::default();
        let mut findings = Vec::new();
        for (position, game) in loaded.games().iter().enumerate() {
            let inspected = inspect::inspect_game(game, spec.fallback_players);
            if inspected.summary.winner.is_none() {
                warn!(
                    "game {position} of {} has no recorded winner (from {})",
                    spec.source_dir,
                    loaded
                        .origins
                        .get(position)
                        .map_or_else(|| spec.source_dir.clone(), |path| path.display().to_string())
                );
            }
            stats.record(&inspected.summary, inspected.record.as_ref());
            findings.extend(inspected.finding);
            index.push(inspected.summary);
        }

        let dir = self.output.join(&spec.output_path);
        fs::create_dir_all(&dir).map_err(|source| PartitionError::Write {
            path: dir.clone(),
            source,
        })?;
        let games_bytes = write_json(&dir.join(AGGREGATE_FILE), &loaded.envelope)?;
        write_json(&dir.join(INDEX_FILE), &index)?;

        Ok(PublishedBucket {
            info: spec.tournament_info(index.len()),
            stats,
            digest: sha256_hex(&games_bytes),
            findings,
        })
    }
}

fn skipped(spec: &BucketSpec, reason: SkipReason) -> SkippedBucket {
    SkippedBucket {
        path: spec.output_path.clone(),
        source_dir: spec.source_dir.clone(),
        reason: reason.describe(),
    }
}

fn reset_dir(dir: &Path) -> Result<(), PartitionError> {
    let write_err = |source| PartitionError::Write {
        path: dir.to_path_buf(),
        source,
    };
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(write_err)?;
    }
    fs::create_dir_all(dir).map_err(write_err)
}

/// Pretty-print with two-space indentation and return the bytes written.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<Vec<u8>, PartitionError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| PartitionError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, &bytes).map_err(|source| PartitionError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}
