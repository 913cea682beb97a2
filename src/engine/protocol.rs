//! Data model for the engine boundary.
//!
//! Everything that crosses the channel pair between the driver and the
//! analysis engine is defined here, with serde shapes matching the engine's
//! wire format: submissions and completions travel as JSON arrays, the
//! report and configuration as camelCase objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration bundle handed to the engine once at boot and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub server: bool,
    pub elm_package: PackageMetadata,
    pub registry: Registry,
}

/// Project package description, as read from `elm-package.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PackageMetadata {
    pub version: String,
    pub summary: String,
    pub repository: String,
    pub license: String,
    pub source_directories: Vec<String>,
    pub exposed_modules: Vec<String>,
    pub dependencies: BTreeMap<String, String>,
    pub elm_version: String,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            summary: String::new(),
            repository: String::new(),
            license: String::new(),
            source_directories: vec![".".to_string()],
            exposed_modules: Vec::new(),
            dependencies: BTreeMap::new(),
            elm_version: String::new(),
        }
    }
}

/// Known packages and their published versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry(pub Vec<RegistryEntry>);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryEntry {
    pub name: String,
    pub summary: String,
    pub versions: Vec<String>,
}

/// One unit of work for the engine: `[path, content]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubmissionWire", into = "SubmissionWire")]
pub struct Submission {
    pub path: String,
    pub content: String,
}

type SubmissionWire = (String, String);

impl Submission {
    pub fn new(path: &Path, content: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            content: content.into(),
        }
    }
}

impl From<SubmissionWire> for Submission {
    fn from((path, content): SubmissionWire) -> Self {
        Self { path, content }
    }
}

impl From<Submission> for SubmissionWire {
    fn from(submission: Submission) -> Self {
        (submission.path, submission.content)
    }
}

/// Per-file verdict. The engine signals failure with the literal string
/// `"Nothing"` in place of a parse result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ParseOutcome {
    Failed,
    Parsed(Value),
}

impl ParseOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ParseOutcome::Failed)
    }
}

impl From<Value> for ParseOutcome {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) if s == "Nothing" => ParseOutcome::Failed,
            other => ParseOutcome::Parsed(other),
        }
    }
}

impl From<ParseOutcome> for Value {
    fn from(outcome: ParseOutcome) -> Self {
        match outcome {
            ParseOutcome::Failed => Value::String("Nothing".to_string()),
            ParseOutcome::Parsed(value) => value,
        }
    }
}

/// Completion event for one submission: `[path, result, elapsedMs]` on the
/// wire. The engine emits exactly one per submitted file, in submission
/// order under single-in-flight use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompletionWire", into = "CompletionWire")]
pub struct Completion {
    pub path: String,
    pub outcome: ParseOutcome,
    pub elapsed_ms: u64,
}

type CompletionWire = (String, ParseOutcome, u64);

impl From<CompletionWire> for Completion {
    fn from((path, outcome, elapsed_ms): CompletionWire) -> Self {
        Self {
            path,
            outcome,
            elapsed_ms,
        }
    }
}

impl From<Completion> for CompletionWire {
    fn from(completion: Completion) -> Self {
        (completion.path, completion.outcome, completion.elapsed_ms)
    }
}

/// Run-terminal aggregate result, emitted at most once per engine instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub messages: Vec<Finding>,
    pub unused_dependencies: Vec<DependencyRef>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty() && self.unused_dependencies.is_empty()
    }
}

/// One finding inside a report. Engines are free to send sparse payloads,
/// so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finding {
    pub id: Option<u64>,
    pub status: Option<String>,
    pub file: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub data: Value,
}

/// Reference to a declared dependency the engine found no use of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyRef(pub String);

/// Log line produced by the engine, forwarded to the process logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: String,
    pub message: String,
}

/// Engine request for the content of a file it wants to analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRequest {
    pub path: String,
}

/// Reply to a [`FileRequest`]. `content` is `None` when the file could not
/// be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedFile {
    pub path: String,
    pub content: Option<String>,
}

/// Everything the engine can emit towards the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Completion(Completion),
    Report(Report),
    Log(LogEvent),
    FileRequest(FileRequest),
}
