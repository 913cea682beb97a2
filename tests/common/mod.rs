// Test utility module for elmscan integration tests
#![allow(dead_code)]

use elmscan::{
    Completion, Engine, EngineChannels, EngineConfig, EngineError, EngineEvent, Finding, LogEvent,
    ParseOutcome, Report,
};
use serde_json::Value;

/// Engine double for file-set runs: answers each submission with the next
/// scripted outcome, in order, then drains until the driver hangs up.
pub struct ScriptedEngine {
    outcomes: Vec<(ParseOutcome, u64)>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn with_outcome(mut self, outcome: ParseOutcome, elapsed_ms: u64) -> Self {
        self.outcomes.push((outcome, elapsed_ms));
        self
    }

    pub fn parsed(value: &str) -> ParseOutcome {
        ParseOutcome::Parsed(Value::String(value.to_string()))
    }
}

impl Engine for ScriptedEngine {
    async fn run(
        self,
        _config: EngineConfig,
        mut channels: EngineChannels,
    ) -> Result<(), EngineError> {
        let mut outcomes = self.outcomes.into_iter();
        while let Some(submission) = channels.submissions.recv().await {
            // Running out of script means the engine dies mid-run.
            let Some((outcome, elapsed_ms)) = outcomes.next() else {
                return Ok(());
            };
            let completion = Completion {
                path: submission.path,
                outcome,
                elapsed_ms,
            };
            if channels
                .events
                .send(EngineEvent::Completion(completion))
                .await
                .is_err()
            {
                return Ok(());
            }
        }
        Ok(())
    }
}

/// Engine double for orchestrator runs: emits scripted log lines, requests
/// files (echoing each reply back into the report so tests can assert the
/// loader round-trip), then emits its report and exits.
pub struct ReportEngine {
    logs: Vec<LogEvent>,
    file_requests: Vec<String>,
    report: Report,
}

impl ReportEngine {
    pub fn new(report: Report) -> Self {
        Self {
            logs: Vec::new(),
            file_requests: Vec::new(),
            report,
        }
    }

    pub fn with_log(mut self, level: &str, message: &str) -> Self {
        self.logs.push(LogEvent {
            level: level.to_string(),
            message: message.to_string(),
        });
        self
    }

    pub fn with_file_request(mut self, path: &str) -> Self {
        self.file_requests.push(path.to_string());
        self
    }
}

impl Engine for ReportEngine {
    async fn run(
        self,
        _config: EngineConfig,
        mut channels: EngineChannels,
    ) -> Result<(), EngineError> {
        let mut report = self.report;
        for event in self.logs {
            channels
                .events
                .send(EngineEvent::Log(event))
                .await
                .map_err(|_| EngineError::Disconnected)?;
        }
        for path in self.file_requests {
            channels
                .events
                .send(EngineEvent::FileRequest(elmscan::FileRequest { path }))
                .await
                .map_err(|_| EngineError::Disconnected)?;
            let reply = channels
                .file_contents
                .recv()
                .await
                .ok_or(EngineError::Disconnected)?;
            report.messages.push(Finding {
                file: Some(reply.path),
                data: reply.content.map(Value::String).unwrap_or(Value::Null),
                ..Finding::default()
            });
        }
        let _ = channels.events.send(EngineEvent::Report(report)).await;
        Ok(())
    }
}

/// Write an executable shell script standing in for the external engine
/// binary. The body runs after the shebang line.
#[cfg(unix)]
pub fn fake_engine_script(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-engine.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).unwrap();
    path
}

/// Engine double that exits immediately without saying anything.
pub struct SilentEngine;

impl Engine for SilentEngine {
    async fn run(
        self,
        _config: EngineConfig,
        _channels: EngineChannels,
    ) -> Result<(), EngineError> {
        Ok(())
    }
}
