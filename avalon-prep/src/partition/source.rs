use std::fs;
use std::path::{Path, PathBuf};

use avalon_core::partition::{AGGREGATE_FILE, BucketSpec, SourceShape};
use log::debug;
use serde_json::{Map, Value};

use super::PartitionError;

/// Why a planned bucket produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingCategory,
    MissingPartition,
    MissingAggregate,
}

impl SkipReason {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::MissingCategory => "category directory not found",
            Self::MissingPartition => "sub-partition directory not found",
            Self::MissingAggregate => "all_games.json not found",
        }
    }
}

/// Games read for one bucket, still in their recorded JSON form.
#[derive(Debug)]
pub struct LoadedBucket {
    /// `{"games": [...]}` exactly as it will be published.
    pub envelope: Value,
    /// File each game came from.
    pub origins: Vec<PathBuf>,
}

impl LoadedBucket {
    #[must_use]
    pub fn games(&self) -> &[Value] {
        self.envelope
            .get("games")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub enum BucketSource {
    Loaded(LoadedBucket),
    Skipped(SkipReason),
}

/// Read the source files a bucket is built from.
///
/// # Errors
///
/// Fails on unreadable files and on malformed JSON. Missing directories and
/// aggregate files are not errors; they yield [`BucketSource::Skipped`].
pub fn load_bucket(dataset: &Path, spec: &BucketSpec) -> Result<BucketSource, PartitionError> {
    let category_dir = dataset.join(spec.category.upstream_dir());
    if !category_dir.is_dir() {
        return Ok(BucketSource::Skipped(SkipReason::MissingCategory));
    }
    let dir = dataset.join(&spec.source_dir);
    if !dir.is_dir() {
        return Ok(BucketSource::Skipped(SkipReason::MissingPartition));
    }
    let loaded = match spec.source_shape() {
        SourceShape::Aggregate => {
            let path = dir.join(AGGREGATE_FILE);
            if !path.is_file() {
                return Ok(BucketSource::Skipped(SkipReason::MissingAggregate));
            }
            load_aggregate(&path)?
        }
        SourceShape::PerGameFiles => load_per_game(&dir)?,
    };
    Ok(BucketSource::Loaded(loaded))
}

fn read_json(path: &Path) -> Result<Value, PartitionError> {
    debug!("reading {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| PartitionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| PartitionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_aggregate(path: &Path) -> Result<LoadedBucket, PartitionError> {
    let envelope = read_json(path)?;
    let count = envelope
        .get("games")
        .and_then(Value::as_array)
        .map(Vec::len)
        .ok_or_else(|| PartitionError::MissingGames {
            path: path.to_path_buf(),
        })?;
    Ok(LoadedBucket {
        envelope,
        origins: vec![path.to_path_buf(); count],
    })
}

fn load_per_game(dir: &Path) -> Result<LoadedBucket, PartitionError> {
    let entries = fs::read_dir(dir).map_err(|source| PartitionError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| PartitionError::Read {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let games = files
        .iter()
        .map(|path| read_json(path))
        .collect::<Result<Vec<_>, _>>()?;
    let mut envelope = Map::new();
    envelope.insert("games".to_string(), Value::Array(games));
    Ok(LoadedBucket {
        envelope: Value::Object(envelope),
        origins: files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalon_core::partition::partition_plan;

    fn skipped(root: &Path, spec: &BucketSpec) -> Option<SkipReason> {
        match load_bucket(root, spec).unwrap() {
            BucketSource::Skipped(reason) => Some(reason),
            BucketSource::Loaded(_) => None,
        }
    }

    fn loaded(root: &Path, spec: &BucketSpec) -> LoadedBucket {
        match load_bucket(root, spec).unwrap() {
            BucketSource::Loaded(bucket) => bucket,
            BucketSource::Skipped(reason) => panic!("skipped: {reason:?}"),
        }
    }

    fn bucket(path: &str) -> BucketSpec {
        partition_plan()
            .into_iter()
            .find(|spec| spec.output_path == path)
            .unwrap()
    }

    #[test]
    fn missing_directories_are_reasons_not_errors() {
        let root = tempfile::tempdir().unwrap();
        let spec = bucket("datasets/B_tournament_6p");
        assert_eq!(
            skipped(root.path(), &spec),
            Some(SkipReason::MissingCategory)
        );

        fs::create_dir_all(root.path().join("2_tournaments_by_player_count")).unwrap();
        assert_eq!(
            skipped(root.path(), &spec),
            Some(SkipReason::MissingPartition)
        );

        fs::create_dir_all(root.path().join(&spec.source_dir)).unwrap();
        assert_eq!(
            skipped(root.path(), &spec),
            Some(SkipReason::MissingAggregate)
        );
    }

    #[test]
    fn per_game_files_load_in_name_order() {
        let root = tempfile::tempdir().unwrap();
        let spec = bucket("datasets/C_individual_5p");
        let dir = root.path().join(&spec.source_dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.json"), r#"{"game_id": "second"}"#).unwrap();
        fs::write(dir.join("a.json"), r#"{"game_id": "first"}"#).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let games = loaded(root.path(), &spec);
        let ids: Vec<_> = games
            .games()
            .iter()
            .map(|g| g["game_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["first", "second"]);
        assert_eq!(games.origins.len(), 2);
    }

    #[test]
    fn aggregate_without_games_array_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let spec = bucket("datasets/A_cross_game_learning");
        let dir = root.path().join(&spec.source_dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(AGGREGATE_FILE), r#"{"rounds": []}"#).unwrap();

        let err = load_bucket(root.path(), &spec).unwrap_err();
        assert!(matches!(err, PartitionError::MissingGames { .. }));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let root = tempfile::tempdir().unwrap();
        let spec = bucket("datasets/C_individual_8p");
        let dir = root.path().join(&spec.source_dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.json"), "{\"game_id\": ").unwrap();

        let err = load_bucket(root.path(), &spec).unwrap_err();
        assert!(matches!(err, PartitionError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
