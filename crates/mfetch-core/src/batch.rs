//! Sequential batch runner.
//!
//! Walks the selected tasks in order: skips destinations that already exist,
//! fetches the rest, and keeps going past failures. Progress lines go to the
//! caller's writer; the same events go to `tracing`.

use std::io::Write;

use crate::catalog::DownloadTask;
use crate::fetcher::{Fetcher, Transport};

/// What happened to one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Downloaded { bytes: u64 },
    AlreadyPresent,
    Failed { error: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub downloaded: usize,
    pub already_present: usize,
    pub failed: usize,
    /// Per-task outcomes, in task order (file name, outcome).
    pub outcomes: Vec<(String, TaskOutcome)>,
}

impl BatchSummary {
    fn record(&mut self, name: &str, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::Downloaded { .. } => self.downloaded += 1,
            TaskOutcome::AlreadyPresent => self.already_present += 1,
            TaskOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push((name.to_string(), outcome));
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Final line printed after every batch.
pub const COMPLETION_LINE: &str = "Model download complete.";

/// Run `tasks` one after another. Never fails: per-task errors are reported to
/// `out` and recorded in the summary. Console write errors are ignored.
pub fn run_batch<T, W>(tasks: &[&DownloadTask], fetcher: &Fetcher<T>, out: &mut W) -> BatchSummary
where
    T: Transport,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for task in tasks {
        let name = task.file_name();

        if task.destination.exists() {
            let _ = writeln!(out, "Already present: {}", name);
            tracing::info!(dest = %task.destination.display(), "already present, skipping");
            summary.record(&name, TaskOutcome::AlreadyPresent);
            continue;
        }

        let _ = writeln!(out, "Downloading: {}", name);
        let _ = out.flush();
        tracing::info!(url = %task.source_url, dest = %task.destination.display(), "downloading");

        match fetcher.fetch(&task.source_url, &task.destination) {
            Ok(bytes) => {
                let _ = writeln!(out, "Done: {}", name);
                tracing::info!(dest = %task.destination.display(), bytes, "downloaded");
                summary.record(&name, TaskOutcome::Downloaded { bytes });
            }
            Err(e) => {
                let _ = writeln!(out, "Failed {}: {}", name, e);
                tracing::warn!(
                    url = %task.source_url,
                    dest = %task.destination.display(),
                    kind = e.kind(),
                    "download failed: {}",
                    e
                );
                summary.record(&name, TaskOutcome::Failed { error: e.to_string() });
            }
        }
    }

    let _ = writeln!(out, "{}", COMPLETION_LINE);
    tracing::info!(
        downloaded = summary.downloaded,
        already_present = summary.already_present,
        failed = summary.failed,
        "batch finished"
    );
    summary
}
