//! The `batch` command: drive an explicit file set through the engine one
//! file at a time and print the run summary.

use crate::config::ScanConfig;
use crate::engine::handle::EngineHandle;
use crate::engine::protocol::EngineConfig;
use crate::engine::worker::WorkerEngine;
use crate::fileset::{Candidate, FileSetRun, RunSummary};
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Build artifacts never hold analysable sources.
const ALWAYS_EXCLUDED: &[&str] = &["elm-stuff"];

pub struct BatchConfig {
    pub paths: Vec<PathBuf>,
    pub engine: PathBuf,
}

pub fn handle_batch(config: BatchConfig) -> Result<RunSummary> {
    let scan_config = ScanConfig::load(Path::new("."));
    let files = collect_candidates(&config.paths, &scan_config.excluded_paths)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()?;
    runtime.block_on(async {
        let handle = EngineHandle::spawn(WorkerEngine::new(&config.engine), EngineConfig::default());
        FileSetRun::new(files, handle, std::io::stdout()).run().await
    })
}

fn collect_candidates(paths: &[PathBuf], excluded: &[String]) -> Result<Vec<Candidate>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(walk_elm_files(path, excluded)?);
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files.into_iter().map(Candidate::pending).collect())
}

fn walk_elm_files(root: &Path, excluded: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(root).hidden(false).git_ignore(true).build();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_elm_file(path) && !is_excluded(path, excluded) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn is_elm_file(path: &Path) -> bool {
    path.extension().map(|ext| ext == "elm").unwrap_or(false)
}

fn is_excluded(path: &Path, excluded: &[String]) -> bool {
    let path = path.to_string_lossy();
    ALWAYS_EXCLUDED.iter().any(|fragment| path.contains(fragment))
        || excluded.iter().any(|fragment| path.contains(fragment))
}
