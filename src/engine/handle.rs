//! Process-local handle to one running engine instance.
//!
//! The handle owns the driver's end of a typed bidirectional channel pair:
//! submissions and file-content replies flow in, completion/report/log/
//! file-request events flow out. No shared mutable state crosses this
//! boundary. The engine itself is anything implementing [`Engine`]; the
//! production implementation is [`crate::engine::worker::WorkerEngine`],
//! tests inject scripted doubles.

use crate::engine::protocol::{EngineConfig, EngineEvent, LoadedFile, Submission};
use std::future::Future;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be started. Not retried.
    #[error("engine failed to start: {0}")]
    Boot(String),
    /// A channel to the engine closed while the run still needed it.
    #[error("engine channel closed before the run finished")]
    Disconnected,
    /// The engine emitted a message the driver could not decode.
    #[error("malformed engine message: {0}")]
    Protocol(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The engine task panicked or was aborted by the runtime.
    #[error("engine task failed: {0}")]
    Aborted(String),
}

/// Channel ends handed to an engine implementation at spawn time.
pub struct EngineChannels {
    pub submissions: mpsc::Receiver<Submission>,
    pub file_contents: mpsc::Receiver<LoadedFile>,
    pub events: mpsc::Sender<EngineEvent>,
}

/// An analysis engine, opaque to the driver.
///
/// `run` consumes the inbound channels until they close and reports
/// everything it has to say through the event sender. Dropping all inbound
/// senders is the only shutdown signal; there is no cancellation.
pub trait Engine: Send + 'static {
    fn run(
        self,
        config: EngineConfig,
        channels: EngineChannels,
    ) -> impl Future<Output = Result<(), EngineError>> + Send;
}

pub struct EngineHandle {
    submissions: mpsc::Sender<Submission>,
    file_contents: mpsc::Sender<LoadedFile>,
    events: mpsc::Receiver<EngineEvent>,
    task: JoinHandle<Result<(), EngineError>>,
}

impl EngineHandle {
    /// Boot an engine with an immutable configuration. Must be called from
    /// within a tokio runtime; the engine future runs as a spawned task.
    pub fn spawn<E: Engine>(engine: E, config: EngineConfig) -> Self {
        let (submission_tx, submission_rx) = mpsc::channel(1);
        let (file_tx, file_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(64);
        let channels = EngineChannels {
            submissions: submission_rx,
            file_contents: file_rx,
            events: event_tx,
        };
        let task = tokio::spawn(engine.run(config, channels));
        Self {
            submissions: submission_tx,
            file_contents: file_tx,
            events: event_rx,
            task,
        }
    }

    /// Queue one unit of work. The engine will eventually emit exactly one
    /// matching completion event; submission order is preserved under
    /// single-in-flight use.
    pub async fn submit(&self, submission: Submission) -> Result<(), EngineError> {
        self.submissions
            .send(submission)
            .await
            .map_err(|_| EngineError::Disconnected)
    }

    /// Answer an earlier file-read request.
    pub async fn provide_file(&self, file: LoadedFile) -> Result<(), EngineError> {
        self.file_contents
            .send(file)
            .await
            .map_err(|_| EngineError::Disconnected)
    }

    /// Next outbound event, or `None` once the engine has shut down and all
    /// pending events are drained.
    pub async fn next_event(&mut self) -> Option<EngineEvent> {
        self.events.recv().await
    }

    /// Close the inbound channels and wait for the engine to finish,
    /// surfacing any error it ended with.
    pub async fn shutdown(self) -> Result<(), EngineError> {
        drop(self.submissions);
        drop(self.file_contents);
        drop(self.events);
        match self.task.await {
            Ok(result) => result,
            Err(join_error) => Err(EngineError::Aborted(join_error.to_string())),
        }
    }
}
