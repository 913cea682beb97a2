//! Sequential dispatch queue over a set of candidate files.
//!
//! The queue owns an ordered backlog and submits exactly one candidate at a
//! time: the next submission happens only after the previous completion
//! event has been consumed. This keeps per-file progress output and the run
//! statistics deterministic at the cost of throughput. Files matching the
//! pre-screen heuristics are counted as skipped and never consume an engine
//! slot.
//!
//! Statistics live in an accumulator owned by the run instance; they are
//! drained once into a [`RunSummary`] when the backlog is exhausted.

use crate::engine::handle::EngineHandle;
use crate::engine::protocol::{Completion, EngineEvent, Submission};
use crate::{loader, logging, prescreen};
use anyhow::{bail, Result};
use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;

/// One file queued for analysis. Content is read lazily unless preloaded.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub content: Option<String>,
}

impl Candidate {
    pub fn pending(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: None,
        }
    }

    pub fn preloaded(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RunStats {
    processed: usize,
    failed: usize,
    skipped: usize,
    total_ms: u64,
    failed_files: Vec<String>,
}

impl RunStats {
    fn into_summary(self) -> RunSummary {
        RunSummary {
            processed: self.processed,
            failed: self.failed,
            skipped: self.skipped,
            total_ms: self.total_ms,
            failed_files: self.failed_files,
        }
    }
}

/// Terminal aggregation of one queue run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total_ms: u64,
    pub failed_files: Vec<String>,
}

impl RunSummary {
    pub fn total_seconds(&self) -> f64 {
        self.total_ms as f64 / 1000.0
    }
}

pub struct FileSetRun<W: Write> {
    backlog: VecDeque<Candidate>,
    handle: EngineHandle,
    stats: RunStats,
    out: W,
}

impl<W: Write> FileSetRun<W> {
    pub fn new(files: Vec<Candidate>, handle: EngineHandle, out: W) -> Self {
        Self {
            backlog: files.into(),
            handle,
            stats: RunStats::default(),
            out,
        }
    }

    /// Drain the backlog: pop, pre-screen, submit, await the completion,
    /// repeat. At most one candidate is ever in flight.
    pub async fn run(mut self) -> Result<RunSummary> {
        while let Some(candidate) = self.backlog.pop_front() {
            let content = match candidate.content {
                Some(content) => content,
                None => loader::read_source(&candidate.path)?,
            };
            if prescreen::should_skip(&content) {
                self.stats.skipped += 1;
                continue;
            }
            self.handle
                .submit(Submission::new(&candidate.path, content))
                .await?;
            let completion = self.await_completion().await?;
            self.record(&completion)?;
        }

        let summary = std::mem::take(&mut self.stats).into_summary();
        write_summary(&mut self.out, &summary)?;
        self.handle.shutdown().await?;
        Ok(summary)
    }

    /// Wait for the in-flight submission's completion, passing any
    /// interleaved log lines and file requests through to their
    /// collaborators.
    async fn await_completion(&mut self) -> Result<Completion> {
        loop {
            match self.handle.next_event().await {
                Some(EngineEvent::Completion(completion)) => return Ok(completion),
                Some(EngineEvent::Log(event)) => logging::emit(&event),
                Some(EngineEvent::FileRequest(request)) => {
                    let reply = loader::load_requested(std::path::Path::new("."), &request);
                    self.handle.provide_file(reply).await?;
                }
                Some(EngineEvent::Report(_)) => {
                    log::debug!("ignoring report event during file-set run");
                }
                None => bail!("engine closed its event stream with a file still in flight"),
            }
        }
    }

    fn record(&mut self, completion: &Completion) -> Result<()> {
        self.stats.processed += 1;
        self.stats.total_ms += completion.elapsed_ms;
        writeln!(
            self.out,
            "{} Analysed file: {} in milliseconds {}",
            self.stats.processed, completion.path, completion.elapsed_ms
        )?;
        if completion.outcome.is_failed() {
            writeln!(self.out, "  > Failed")?;
            self.stats.failed += 1;
            self.stats.failed_files.push(completion.path.clone());
        }
        Ok(())
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> Result<()> {
    writeln!(out, "Failed: {}", summary.failed)?;
    writeln!(out, "Invalid: {}", summary.skipped)?;
    writeln!(out, "Counter: {}", summary.processed)?;
    writeln!(out, "Total Time: {}", summary.total_seconds())?;
    writeln!(out)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&summary.failed_files)?)?;
    Ok(())
}
