//! The asynchronous message-passing boundary to the analysis engine.

pub mod handle;
pub mod protocol;
pub mod worker;

pub use handle::{Engine, EngineChannels, EngineError, EngineHandle};
pub use protocol::{
    Completion, DependencyRef, EngineConfig, EngineEvent, FileRequest, Finding, LoadedFile,
    LogEvent, PackageMetadata, ParseOutcome, Registry, RegistryEntry, Report, Submission,
};
pub use worker::WorkerEngine;
