use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

const GOOD_WIN: &str = include_str!("../../avalon-core/tests/fixtures/good_win_5p.json");
const ASSASSIN_WIN: &str = include_str!("../../avalon-core/tests/fixtures/assassin_win_6p.json");
const EVIL_FAILS: &str = include_str!("../../avalon-core/tests/fixtures/evil_fails_5p.json");

fn aggregate(games: &[&str]) -> String {
    format!("{{\"games\": [{}]}}", games.join(","))
}

/// Dataset with category A, B/6p, C/5p (two files) and D/high.
fn write_dataset(root: &Path) {
    let a = root.join("1_cross_game_learning_50g");
    fs::create_dir_all(&a).unwrap();
    fs::write(a.join("all_games.json"), aggregate(&[GOOD_WIN, EVIL_FAILS])).unwrap();

    let b = root.join("2_tournaments_by_player_count/6p");
    fs::create_dir_all(&b).unwrap();
    fs::write(b.join("all_games.json"), aggregate(&[ASSASSIN_WIN])).unwrap();

    let c = root.join("3_individual_games_by_player_count/5p");
    fs::create_dir_all(&c).unwrap();
    fs::write(c.join("game_002.json"), EVIL_FAILS).unwrap();
    fs::write(c.join("game_001.json"), GOOD_WIN).unwrap();

    let d = root.join("4_reasoning_comparison/high");
    fs::create_dir_all(&d).unwrap();
    fs::write(d.join("all_games.json"), aggregate(&[EVIL_FAILS])).unwrap();
}

fn run(dataset: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_avalon-prep"))
        .arg("--dataset")
        .arg(dataset)
        .arg("--output")
        .arg(output)
        .args(extra)
        .output()
        .expect("run cli")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn publishes_manifest_index_and_games_per_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    write_dataset(&dataset);

    let result = run(&dataset, &output, &[]);
    assert!(result.status.success(), "{result:?}");

    let manifest = read_json(&output.join("tournaments.json"));
    let names: Vec<_> = manifest
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "A: Cross-Game Learning (2 games)",
            "B: Tournament 6p (1 games)",
            "C: Individual 5p (2 games)",
            "D: Reasoning high (1 games)",
        ]
    );
    assert_eq!(manifest[1]["players"], 6);
    assert_eq!(manifest[2]["hasMemory"], false);
    assert_eq!(manifest[3]["reasoning"], "high");

    for entry in manifest.as_array().unwrap() {
        let path = output.join(entry["path"].as_str().unwrap());
        let games = read_json(&path.join("all_games.json"));
        let index = read_json(&path.join("index.json"));
        let count = entry["games"].as_u64().unwrap() as usize;
        assert_eq!(games["games"].as_array().unwrap().len(), count);
        assert_eq!(index.as_array().unwrap().len(), count);
    }

    let individual = read_json(&output.join("datasets/C_individual_5p/index.json"));
    assert_eq!(individual[0]["id"], "game_good_5p_001");
    assert_eq!(individual[0]["winner"], "good");
    assert_eq!(individual[0]["players"], 5);
    assert_eq!(individual[1]["id"], "game_fails_5p_003");
}

#[test]
fn aggregate_content_passes_through_in_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    write_dataset(&dataset);

    assert!(run(&dataset, &output, &[]).status.success());
    let published =
        fs::read_to_string(output.join("datasets/B_tournament_6p/all_games.json")).unwrap();
    let game_id = published.find("\"game_id\"").unwrap();
    let config = published.find("\"config\"").unwrap();
    let winner = published.find("\"winner\"").unwrap();
    assert!(game_id < config && config < winner);
    assert!(published.starts_with("{\n  \"games\": [\n    {"));
    assert_eq!(
        read_json(&output.join("datasets/B_tournament_6p/all_games.json"))["games"][0],
        serde_json::from_str::<Value>(ASSASSIN_WIN).unwrap()
    );
}

/// Every file under `root`, keyed by its relative path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                files.insert(relative, fs::read(&path).unwrap());
            }
        }
    }
    files
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    write_dataset(&dataset);

    let report_a = dir.path().join("first.json");
    let report_b = dir.path().join("second.json");
    let first = run(
        &dataset,
        &output,
        &["--report", "json", "--report-output", report_a.to_str().unwrap()],
    );
    assert!(first.status.success(), "{first:?}");
    let tree_first = snapshot(&output);

    fs::write(output.join("stale.txt"), "left over").unwrap();
    let second = run(
        &dataset,
        &output,
        &["--report", "json", "--report-output", report_b.to_str().unwrap()],
    );
    assert!(second.status.success(), "{second:?}");
    let tree_second = snapshot(&output);

    assert!(!output.join("stale.txt").exists());
    assert!(tree_first.contains_key(Path::new("tournaments.json")));
    let indexes = tree_first
        .keys()
        .filter(|path| path.ends_with("index.json"))
        .count();
    assert_eq!(indexes, 4);
    assert_eq!(tree_first.len(), 9);
    for (path, bytes) in &tree_first {
        assert_eq!(tree_second.get(path), Some(bytes), "{} changed", path.display());
    }
    assert_eq!(tree_first.len(), tree_second.len());

    let digests = |path: &Path| -> Vec<String> {
        read_json(path)["buckets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["digest"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(digests(&report_a), digests(&report_b));
    assert_eq!(digests(&report_a).len(), 4);
}

#[test]
fn unfinished_game_is_listed_with_null_winner() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    let a = dataset.join("1_cross_game_learning_50g");
    fs::create_dir_all(&a).unwrap();
    let unfinished = GOOD_WIN.replace("\"winner\": \"good\"", "\"winner\": null");
    assert_ne!(unfinished, GOOD_WIN);
    fs::write(a.join("all_games.json"), aggregate(&[&unfinished, EVIL_FAILS])).unwrap();

    let report = dir.path().join("report.json");
    let result = run(
        &dataset,
        &output,
        &["--report", "json", "--report-output", report.to_str().unwrap()],
    );
    assert!(result.status.success(), "{result:?}");

    let index = read_json(&output.join("datasets/A_cross_game_learning/index.json"));
    assert_eq!(index.as_array().unwrap().len(), 2);
    assert_eq!(index[0]["id"], "game_good_5p_001");
    assert_eq!(index[0]["winner"], Value::Null);
    assert_eq!(index[0]["players"], 5);
    assert_eq!(index[1]["winner"], "evil");

    let report = read_json(&report);
    assert_eq!(report["clean"], false);
    let bucket = &report["buckets"][0];
    assert_eq!(bucket["stats"]["undecided"], 1);
    assert_eq!(bucket["findings"][0]["status"], "unreadable");
    assert_eq!(bucket["findings"][0]["game_id"], "game_good_5p_001");
}

#[test]
fn missing_categories_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    let only_a = dataset.join("1_cross_game_learning_50g");
    fs::create_dir_all(&only_a).unwrap();
    fs::write(only_a.join("all_games.json"), aggregate(&[GOOD_WIN])).unwrap();
    fs::create_dir_all(dataset.join("4_reasoning_comparison/low")).unwrap();

    let report = dir.path().join("report.json");
    let result = run(
        &dataset,
        &output,
        &["--report", "json", "--report-output", report.to_str().unwrap()],
    );
    assert!(result.status.success(), "{result:?}");

    let manifest = read_json(&output.join("tournaments.json"));
    assert_eq!(manifest.as_array().unwrap().len(), 1);
    let report = read_json(&report);
    assert_eq!(report["total_games"], 1);
    assert_eq!(report["clean"], true);
    let reasons: Vec<_> = report["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["reason"].as_str().unwrap())
        .collect();
    assert!(reasons.contains(&"all_games.json not found"));
    assert!(reasons.contains(&"category directory not found"));
}

#[test]
fn malformed_json_aborts_and_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    write_dataset(&dataset);
    fs::write(
        dataset.join("3_individual_games_by_player_count/5p/game_003.json"),
        "{\"game_id\": \"broken\",",
    )
    .unwrap();

    let result = run(&dataset, &output, &[]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("game_003.json"), "{stderr}");
    assert!(!output.join("tournaments.json").exists());
    assert!(!output.join("datasets/C_individual_5p").exists());
}

#[test]
fn strict_mode_fails_on_audit_findings() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset");
    let output = dir.path().join("data");
    let a = dataset.join("1_cross_game_learning_50g");
    fs::create_dir_all(&a).unwrap();
    let tampered = GOOD_WIN.replace("\"winner\": \"good\"", "\"winner\": \"evil\"");
    fs::write(a.join("all_games.json"), aggregate(&[&tampered])).unwrap();

    let report = dir.path().join("report.md");
    let lenient = run(
        &dataset,
        &output,
        &["--report", "markdown", "--report-output", report.to_str().unwrap()],
    );
    assert!(lenient.status.success(), "{lenient:?}");
    let text = fs::read_to_string(&report).unwrap();
    assert!(text.contains("winner recorded as evil, transcript implies good"));

    let strict = run(
        &dataset,
        &output,
        &["--strict", "--report-output", report.to_str().unwrap()],
    );
    assert_eq!(strict.status.code(), Some(1));
    assert!(output.join("tournaments.json").exists());
}

#[test]
fn list_buckets_prints_plan_without_touching_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data");
    let result = run(dir.path(), &output, &["--list-buckets"]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Partition plan:"));
    assert!(stdout.contains("datasets/D_reasoning_medium"));
    assert_eq!(stdout.lines().count(), 17);
    assert!(!output.exists());
}
