//! Subprocess engine adapter.
//!
//! Runs the external analysis engine as a child process and speaks
//! newline-delimited JSON over its stdin/stdout: one `{"tag": ..., "data": ...}`
//! envelope per line. The configuration goes out first as a `start` envelope;
//! after that, submissions and file-content replies are forwarded as they
//! arrive and engine output lines are decoded into [`EngineEvent`]s.
//!
//! Closing the inbound channels (see [`EngineHandle::shutdown`]) closes the
//! child's stdin, which is the engine's signal to exit. No timeout is
//! enforced anywhere in this adapter.
//!
//! [`EngineHandle::shutdown`]: crate::engine::handle::EngineHandle::shutdown

use crate::engine::handle::{Engine, EngineChannels, EngineError};
use crate::engine::protocol::{
    Completion, EngineConfig, EngineEvent, FileRequest, LoadedFile, LogEvent, Report, Submission,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;

/// Envelope sent to the engine process.
#[derive(Debug, Serialize)]
#[serde(tag = "tag", content = "data", rename_all = "camelCase")]
enum WorkerRequest<'a> {
    Start(&'a EngineConfig),
    File(&'a Submission),
    FileContent(&'a LoadedFile),
}

/// Envelope received from the engine process.
#[derive(Debug, Deserialize)]
#[serde(tag = "tag", content = "data", rename_all = "camelCase")]
enum WorkerResponse {
    Completion(Completion),
    Report(Report),
    Log(LogEvent),
    LoadFile(FileRequest),
}

impl WorkerResponse {
    fn into_event(self) -> EngineEvent {
        match self {
            WorkerResponse::Completion(completion) => EngineEvent::Completion(completion),
            WorkerResponse::Report(report) => EngineEvent::Report(report),
            WorkerResponse::Log(event) => EngineEvent::Log(event),
            WorkerResponse::LoadFile(request) => EngineEvent::FileRequest(request),
        }
    }
}

/// The production [`Engine`]: an external engine binary driven over stdio.
pub struct WorkerEngine {
    command: PathBuf,
}

impl WorkerEngine {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Engine for WorkerEngine {
    async fn run(
        self,
        config: EngineConfig,
        mut channels: EngineChannels,
    ) -> Result<(), EngineError> {
        let mut child = Command::new(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|err| EngineError::Boot(format!("{}: {err}", self.command.display())))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Boot("engine stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::Boot("engine stdout unavailable".to_string()))?;
        let mut lines = BufReader::new(stdout).lines();

        send_line(&mut stdin, &WorkerRequest::Start(&config)).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        let response: WorkerResponse = serde_json::from_str(&line)?;
                        if channels.events.send(response.into_event()).await.is_err() {
                            // Driver hung up; stop relaying.
                            break;
                        }
                    }
                    None => break,
                },
                submission = channels.submissions.recv() => match submission {
                    Some(submission) => {
                        send_line(&mut stdin, &WorkerRequest::File(&submission)).await?;
                    }
                    None => break,
                },
                file = channels.file_contents.recv() => match file {
                    Some(file) => {
                        send_line(&mut stdin, &WorkerRequest::FileContent(&file)).await?;
                    }
                    None => break,
                },
            }
        }

        // Stdin EOF tells the engine to exit; wait for it without a timeout.
        drop(stdin);
        child.wait().await?;
        Ok(())
    }
}

async fn send_line<W, T>(writer: &mut W, message: &T) -> Result<(), EngineError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
