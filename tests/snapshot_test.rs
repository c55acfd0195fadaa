// tests/snapshot_test.rs — Integration test: headless `snapshot` command

use gridboard::cli::snapshot::{run_snapshot, SnapshotFormat, SnapshotOptions};
use gridboard::dashboard::{DashboardController, WidgetId, WidgetType};
use gridboard::infra::config::Config;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn json_snapshot(opts: SnapshotOptions) -> Value {
    let opts = SnapshotOptions {
        format: SnapshotFormat::Json,
        ..opts
    };
    let out = run_snapshot(&opts, DashboardController::with_seed(8), Config::default()).unwrap();
    serde_json::from_str(&out).unwrap()
}

#[test]
fn test_json_initial_state() {
    let v = json_snapshot(SnapshotOptions::default());

    assert_eq!(v["next_id"], 3);
    let widgets = v["widgets"].as_array().unwrap();
    assert_eq!(widgets.len(), 2);
    assert_eq!(widgets[0]["id"], "widget-1");
    assert_eq!(widgets[0]["type"], "chart");
    assert_eq!(widgets[0]["data"], 420);
    assert_eq!(widgets[1]["type"], "task-list");
    assert_eq!(
        widgets[1]["data"],
        serde_json::json!(["Buy eggs", "Review PR"])
    );
}

#[test]
fn test_json_after_actions() {
    let v = json_snapshot(SnapshotOptions {
        add: vec![WidgetType::InfoPanel, WidgetType::Chart],
        remove: vec![WidgetId::from("widget-2"), WidgetId::from("widget-99")],
        ..Default::default()
    });

    assert_eq!(v["next_id"], 5);
    let ids: Vec<&str> = v["widgets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["widget-1", "widget-3", "widget-4"]);
    assert_eq!(v["widgets"][1]["type"], "info-panel");
    assert!(v["widgets"][2]["data"].as_u64().unwrap() < 1000);
}

#[test]
fn test_text_snapshot() {
    let opts = SnapshotOptions {
        add: vec![WidgetType::InfoPanel],
        width: 120,
        height: 30,
        ..Default::default()
    };
    let out = run_snapshot(&opts, DashboardController::with_seed(8), Config::default()).unwrap();

    assert_eq!(out.lines().count(), 30);
    assert!(out.contains("Dashboard"));
    assert!(out.contains("Buy eggs"));
    assert!(out.contains("informational panel"));
    assert_eq!(out.matches("[x]").count(), 3);
}

#[test]
fn test_text_snapshot_of_empty_dashboard() {
    let opts = SnapshotOptions {
        remove: vec![WidgetId::from("widget-1"), WidgetId::from("widget-2")],
        ..Default::default()
    };
    let out = run_snapshot(&opts, DashboardController::with_seed(8), Config::default()).unwrap();
    assert!(out.contains("No widgets added yet"));
}

#[test]
fn test_unseeded_dashboard_starts_empty() {
    let controller = DashboardController::from_options(false, Some(1));
    let opts = SnapshotOptions {
        format: SnapshotFormat::Json,
        add: vec![WidgetType::TaskList],
        ..Default::default()
    };
    let out = run_snapshot(&opts, controller, Config::default()).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["widgets"][0]["id"], "widget-1");
    assert_eq!(v["next_id"], 2);
}
