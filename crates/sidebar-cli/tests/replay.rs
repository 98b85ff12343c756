//! Integration tests for script parsing and replay.

use std::fs;

use sidebar_cli::script::{Replay, ScriptStep, load_script, parse_script};
use sidebar_cli::summary::ReplaySummary;
use sidebar_model::Tag;
use sidebar_store::StoreConfig;

const SCRIPT: &str = r#"
# one annotation and one page note
{"action": "addAnnotations", "annotations": [{"id": "a1", "target": [{"source": "http://example.org"}]}, {"id": "n1", "target": []}]}
{"action": "anchoringTimeout"}
{"action": "updateAnchorStatus", "statuses": {"t2": false}}

{"action": "createAnnotation", "annotation": {"references": ["a1"], "target": [{"source": "http://example.org"}]}}
{"action": "selectTab", "tab": "Orphans"}
{"action": "selectTab", "tab": "orphans"}
{"action": "selectAnnotations", "ids": ["a1"]}
{"action": "highlightAnnotations", "ids": ["a1", "n1"]}
{"action": "setFilterQuery", "query": "user:jane"}
{"action": "setFocusModeFocused", "focused": false}
"#;

const CONFIG: &str = r#"{
    "group": "g1",
    "focus": {"user": {"userid": "acct:jane@example.org", "displayName": "Jane"}}
}"#;

fn replay_fixture() -> Replay {
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("session.jsonl");
    let config_path = dir.path().join("host.json");
    fs::write(&script_path, SCRIPT).unwrap();
    fs::write(&config_path, CONFIG).unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    let steps = load_script(&script_path).unwrap();
    assert_eq!(steps.len(), 10);

    let mut replay = Replay::new(&config);
    replay.run(steps);
    replay
}

#[test]
fn replay_summary() {
    let replay = replay_fixture();
    let summary = ReplaySummary::from_replay(&replay);

    insta::assert_snapshot!(summary.to_string().trim_end(), @r"
    Steps: 9 applied, 1 ignored
    Annotations: 0
    Page notes: 1
    Orphans: 1
    Replies: 1
    Anchoring: settled
    Tab: orphans
    Sort: Oldest (of Newest, Oldest, Location)
    Selected: a1
    Focused: -
    Highlighted: a1, n1
    Filter: user:jane
    Focus mode: Jane (off)
    Direct link: annotation -, group g1
    ");
}

#[test]
fn final_state_serializes_for_json_output() {
    let replay = replay_fixture();
    let json = serde_json::to_value(replay.store().state()).unwrap();

    assert_eq!(json["selection"]["selectedTab"], "orphans");
    assert_eq!(json["selection"]["sortKey"], "Oldest");
    assert_eq!(json["directLinked"]["groupId"], "g1");
    let records = json["annotations"]["annotations"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["$orphan"], true);
    assert_eq!(records[2]["$tag"], "t3");
}

#[test]
fn anchoring_timeout_without_pending_tags_is_ignored() {
    let mut replay = Replay::new(&StoreConfig::default());
    replay.apply(ScriptStep::AnchoringTimeout);
    assert_eq!(replay.ignored(), 1);
    assert_eq!(replay.applied(), 0);
}

#[test]
fn stand_alone_viewer_collects_no_timeouts() {
    let steps = parse_script(
        r#"
        {"action": "setAppIsSidebar", "isSidebar": false}
        {"action": "addAnnotations", "annotations": [{"id": "a", "target": [{"source": "s"}]}]}
        "#,
    )
    .unwrap();
    let mut replay = Replay::new(&StoreConfig::default());
    replay.run(steps);

    assert!(replay.pending_anchor().is_empty());
    assert!(replay.store().state().annotations.is_waiting_to_anchor_annotations());
}

#[test]
fn sidebar_collects_pending_tags() {
    let steps = parse_script(
        r#"{"action": "addAnnotations", "annotations": [{"id": "a", "target": [{"source": "s"}]}]}"#,
    )
    .unwrap();
    let mut replay = Replay::new(&StoreConfig::default());
    replay.run(steps);
    assert_eq!(replay.pending_anchor(), &[Tag::generated(1)]);
}

#[test]
fn parse_errors_report_line_numbers() {
    let err = parse_script("# header\n\n{\"action\": \"selectTab\", \"tab\": \"notes\"}\n{\"action\": \"explode\"}\n")
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid script step on line 4");
    assert!(format!("{err:#}").contains("explode"));
}

#[test]
fn missing_script_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.jsonl");
    let err = load_script(&path).unwrap_err();
    assert!(err.to_string().starts_with("read script"));
}
