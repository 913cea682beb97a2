// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod fileset;
pub mod loader;
pub mod logging;
pub mod prescreen;
pub mod registry;
pub mod report;

// Re-export commonly used types
pub use crate::engine::handle::{Engine, EngineChannels, EngineError, EngineHandle};
pub use crate::engine::protocol::{
    Completion, DependencyRef, EngineConfig, EngineEvent, FileRequest, Finding, LoadedFile,
    LogEvent, PackageMetadata, ParseOutcome, Registry, RegistryEntry, Report, Submission,
};
pub use crate::engine::worker::WorkerEngine;

pub use crate::fileset::{Candidate, FileSetRun, RunSummary};

pub use crate::prescreen::should_skip;

pub use crate::commands::{exit_status, run_analysis};
