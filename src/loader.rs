//! File-reading collaborator for the queue and the engine's read requests.

use crate::engine::protocol::{FileRequest, LoadedFile};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a candidate file for submission.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Serve an engine file-read request. Relative paths resolve against the
/// project root; a missing or unreadable file replies with no content
/// rather than failing the run.
pub fn load_requested(root: &Path, request: &FileRequest) -> LoadedFile {
    let path = root.join(&request.path);
    match fs::read_to_string(&path) {
        Ok(content) => LoadedFile {
            path: request.path.clone(),
            content: Some(content),
        },
        Err(err) => {
            log::warn!("engine requested {} but it could not be read: {err}", request.path);
            LoadedFile {
                path: request.path.clone(),
                content: None,
            }
        }
    }
}
