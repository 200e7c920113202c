//! Integration tests for the runtime: loading, sessions, and commands

use std::fs;
use std::path::PathBuf;

use mstgraph_engine::EngineConfig;
use mstgraph_foundation::{EntityKind, ErrorCategory, ErrorKind, Region, Result};
use mstgraph_runtime::loader::to_msgpack;
use mstgraph_runtime::{Command, LineEditor, Outcome, ReadResult, Repl, Session, read_dataset};
use mstgraph_storage::Snapshot;

use crate::SAMPLE_PATH;

/// A scratch file removed on drop.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> Self {
        Self(std::env::temp_dir().join(format!("mstgraph-{}-{name}", std::process::id())))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

/// An editor that never yields input.
struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}
}

fn run(session: &mut Session, line: &str) -> String {
    match Command::parse(line).unwrap().unwrap().execute(session).unwrap() {
        Outcome::Output(text) => text,
        Outcome::Quit => panic!("unexpected quit"),
    }
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn msgpack_and_json_load_identically() {
    let dataset = read_dataset(SAMPLE_PATH).unwrap();
    let file = TempFile::new("sample.msgpack");
    fs::write(&file.0, to_msgpack(&dataset).unwrap()).unwrap();

    let from_msgpack = read_dataset(&file.0).unwrap();
    assert_eq!(from_msgpack, dataset);
}

#[test]
fn malformed_file_is_a_load_error() {
    let file = TempFile::new("broken.json");
    fs::write(&file.0, "{ not json").unwrap();

    let err = read_dataset(&file.0).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Load);
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_dataset("/nonexistent/mstgraph/dataset.json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn load_switches_region_and_labels_snapshot() {
    let mut session = Session::default();
    let snapshot = session.load(Region::NA, SAMPLE_PATH).unwrap();
    assert_eq!(session.region(), Region::NA);
    assert_eq!(snapshot.label(), SAMPLE_PATH);
    assert!(session.catalog().contains(Region::NA));
    assert!(!session.catalog().contains(Region::JP));
}

#[test]
fn regions_are_independent() {
    let mut session = Session::default();
    session.load(Region::JP, SAMPLE_PATH).unwrap();
    session.publish(Snapshot::empty(Region::KR));

    session.use_region(Region::KR).unwrap();
    assert!(session.show(EntityKind::Servant, 100_100, None).is_err());

    session.use_region(Region::JP).unwrap();
    assert!(session.show(EntityKind::Servant, 100_100, None).is_ok());
}

#[test]
fn failed_load_keeps_previous_snapshot() {
    let mut session = Session::default();
    session.load(Region::JP, SAMPLE_PATH).unwrap();
    assert!(session.load(Region::JP, "/nonexistent/mstgraph.json").is_err());
    assert_eq!(session.snapshot().unwrap().label(), SAMPLE_PATH);
}

#[test]
fn reload_rereads_the_file() {
    let file = TempFile::new("reload.json");
    fs::write(&file.0, r#"{"mstBuff": [{"id": 1}]}"#).unwrap();

    let mut session = Session::default();
    session.load(Region::JP, &file.0).unwrap();
    let before = session.snapshot().unwrap();

    fs::write(&file.0, r#"{"mstBuff": [{"id": 1}, {"id": 2}]}"#).unwrap();
    let after = session.reload(None).unwrap();

    assert_eq!(before.store().len(), 1);
    assert_eq!(after.store().len(), 2);
    assert_eq!(session.snapshot().unwrap().store().len(), 2);
}

#[test]
fn show_depth_is_bounded_by_engine_limit() {
    let mut session = Session::new(EngineConfig::new().with_forward_depth_limit(0));
    session.load(Region::JP, SAMPLE_PATH).unwrap();
    let formatted = session.show(EntityKind::Servant, 100_100, Some(5)).unwrap();
    let json = serde_json::to_value(formatted).unwrap();
    assert_eq!(json["skills"][0]["kind"], "skill");
    assert_eq!(json["skills"][0]["id"], 1000);
    assert!(json["skills"][0].get("functions").is_none());
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn command_script_end_to_end() {
    let mut session = Session::default();
    let loaded = run(&mut session, &format!("load jp {SAMPLE_PATH}"));
    assert!(loaded.contains("5 warnings"));

    let shown = run(&mut session, "show svt 100100 1");
    let json: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(json["name"], "Altria Pendragon");

    let reversed = run(&mut session, "reverse buff 101 skillNp");
    let json: serde_json::Value = serde_json::from_str(&reversed).unwrap();
    assert_eq!(json["depth"], "skillNp");
    assert_eq!(json["node"]["ancestors"][0]["edge"], "buffFunction");

    let decoded = run(&mut session, "decode addState [1000, 3, -1, 300]");
    let json: serde_json::Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(json["Value"], 300);

    let warnings = run(&mut session, "warnings");
    assert!(warnings.starts_with("JP: 5 warnings (3 dangling, 1 duplicate, 1 orphan)"));

    let stats = run(&mut session, "stats");
    assert!(stats.starts_with(&format!("JP ({SAMPLE_PATH})")));
}

#[test]
fn command_errors_are_reported() {
    let mut session = Session::default();
    let err = Command::parse("show buff 101")
        .unwrap()
        .unwrap()
        .execute(&mut session)
        .unwrap_err();
    assert!(err.to_string().contains("no dataset loaded"));

    assert!(Command::parse("frobnicate").is_err());
    assert!(Command::parse("reverse buff 101 galaxy").is_err());
}

#[test]
fn repl_runs_a_script_file() {
    let script = TempFile::new("script.mst");
    fs::write(
        &script.0,
        format!("# sample session\nload JP {SAMPLE_PATH}\n\nshow buff 101\nquit\nstats\n"),
    )
    .unwrap();

    let mut repl = Repl::with_editor(NoInput, Session::default());
    let output = repl.eval_file(&script.0).unwrap();
    assert_eq!(output.len(), 2);
    assert!(output[1].contains("\"Attack Up\""));
    assert_eq!(repl.session().region(), Region::JP);
}
