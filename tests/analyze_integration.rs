mod common;

use common::{ReportEngine, SilentEngine};
use elmscan::commands::{exit_status, run_analysis};
use elmscan::{DependencyRef, EngineConfig, Finding, Report};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;

#[tokio::test]
async fn clean_report_flows_through_and_exits_zero() {
    let engine = ReportEngine::new(Report::default());
    let report = run_analysis(engine, EngineConfig::default(), Path::new("."))
        .await
        .unwrap();
    assert_eq!(report, Report::default());
    assert_eq!(exit_status(&report), 0);
}

#[tokio::test]
async fn findings_exit_one() {
    let scripted = Report {
        messages: vec![Finding::default()],
        unused_dependencies: Vec::new(),
    };
    let engine = ReportEngine::new(scripted.clone());
    let report = run_analysis(engine, EngineConfig::default(), Path::new("."))
        .await
        .unwrap();
    assert_eq!(report, scripted);
    assert_eq!(exit_status(&report), 1);
}

#[tokio::test]
async fn unused_dependencies_exit_one() {
    let scripted = Report {
        messages: Vec::new(),
        unused_dependencies: vec![DependencyRef("elm-lang/html".to_string())],
    };
    let engine = ReportEngine::new(scripted);
    let report = run_analysis(engine, EngineConfig::default(), Path::new("."))
        .await
        .unwrap();
    assert_eq!(exit_status(&report), 1);
}

#[tokio::test]
async fn log_events_are_passed_through_before_the_report() {
    let engine = ReportEngine::new(Report::default())
        .with_log("INFO", "starting up")
        .with_log("warning", "odd module");
    let report = run_analysis(engine, EngineConfig::default(), Path::new("."))
        .await
        .unwrap();
    assert!(report.is_clean());
}

#[tokio::test]
async fn file_requests_are_served_from_the_project_root() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("Main.elm"), "module Main exposing (..)").unwrap();

    let engine = ReportEngine::new(Report::default()).with_file_request("Main.elm");
    let report = run_analysis(engine, EngineConfig::default(), dir.path())
        .await
        .unwrap();

    // The double echoes each served file back as a finding.
    assert_eq!(report.messages.len(), 1);
    assert_eq!(report.messages[0].file.as_deref(), Some("Main.elm"));
    assert_eq!(
        report.messages[0].data,
        Value::String("module Main exposing (..)".to_string())
    );
}

#[tokio::test]
async fn unreadable_file_request_is_answered_with_no_content() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = ReportEngine::new(Report::default()).with_file_request("Gone.elm");
    let report = run_analysis(engine, EngineConfig::default(), dir.path())
        .await
        .unwrap();
    assert_eq!(report.messages[0].data, Value::Null);
}

#[tokio::test]
async fn engine_exiting_without_a_report_is_an_error() {
    let result = run_analysis(SilentEngine, EngineConfig::default(), Path::new(".")).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("before producing a report"));
}
