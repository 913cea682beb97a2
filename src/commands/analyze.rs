//! The `analyze` command: boot the engine against a whole project, hand its
//! report to the reporter, and derive the process exit status.
//!
//! The flow is a single attempt with no retries: resolve the dependency
//! registry, create the engine with `{server: false, package, registry}`,
//! then pump engine events until the run-terminal report arrives. Log
//! events and file-read requests are passed through to their collaborators
//! untouched. A stalled engine stalls the run; timeouts are left to outer
//! process supervision.

use crate::cli::OutputFormat;
use crate::config::ScanConfig;
use crate::engine::handle::{Engine, EngineHandle};
use crate::engine::protocol::{EngineConfig, EngineEvent, Report};
use crate::engine::worker::WorkerEngine;
use crate::{loader, logging, registry, report};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub engine: PathBuf,
}

/// Entry point for `elmscan analyze`. Returns the exit code the process
/// should terminate with; the actual `process::exit` call stays in `main`.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<i32> {
    let scan_config = ScanConfig::load(&config.path);
    let format = config
        .format
        .or(scan_config.format)
        .unwrap_or(OutputFormat::Text);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()?;
    let report = runtime.block_on(async {
        let registry = registry::resolve_registry().await;
        let elm_package = registry::load_package_metadata(&config.path);
        let engine_config = EngineConfig {
            server: false,
            elm_package,
            registry,
        };
        run_analysis(WorkerEngine::new(&config.engine), engine_config, &config.path).await
    })?;

    match &config.output {
        Some(path) => {
            colored::control::set_override(false);
            let mut out = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            report::write_report(format, &report, &mut out)?;
        }
        None => {
            let mut out = std::io::stdout();
            report::write_report(format, &report, &mut out)?;
            out.flush()?;
        }
    }

    Ok(exit_status(&report))
}

/// Boot an engine and pump its events until the report arrives. Generic
/// over the engine so tests can inject scripted doubles.
pub async fn run_analysis<E: Engine>(
    engine: E,
    config: EngineConfig,
    root: &Path,
) -> Result<Report> {
    let mut handle = EngineHandle::spawn(engine, config);
    loop {
        match handle.next_event().await {
            Some(EngineEvent::Report(report)) => {
                handle.shutdown().await?;
                return Ok(report);
            }
            Some(EngineEvent::Log(event)) => logging::emit(&event),
            Some(EngineEvent::FileRequest(request)) => {
                let reply = loader::load_requested(root, &request);
                handle.provide_file(reply).await?;
            }
            Some(EngineEvent::Completion(completion)) => {
                log::debug!(
                    "{} analysed in {}ms",
                    completion.path,
                    completion.elapsed_ms
                );
            }
            None => {
                // Surfaces the engine's own failure when it has one.
                handle.shutdown().await?;
                bail!("engine terminated before producing a report");
            }
        }
    }
}

/// Pure decision from the report: 1 when anything needs attention, 0
/// otherwise. CI keys off this.
pub fn exit_status(report: &Report) -> i32 {
    if report.is_clean() {
        0
    } else {
        1
    }
}
