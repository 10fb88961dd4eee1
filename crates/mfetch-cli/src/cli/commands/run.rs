//! `mfetch run <group>` – download a group of models.

use anyhow::{Context, Result};
use mfetch_core::batch::{run_batch, BatchSummary};
use mfetch_core::catalog::Catalog;
use mfetch_core::fetcher::{Fetcher, Transport};
use std::io::Write;

use super::file_count;

#[derive(Debug)]
pub enum RunStatus {
    /// Batch ran to the end; individual tasks may still have failed.
    Completed(BatchSummary),
    /// Bad group selection; nothing was downloaded.
    Usage,
}

pub fn run_group<T, W, E>(
    catalog: &Catalog,
    groups: &[String],
    fetcher: &Fetcher<T>,
    out: &mut W,
    err: &mut E,
) -> Result<RunStatus>
where
    T: Transport,
    W: Write,
    E: Write,
{
    let tasks = match catalog.select(groups) {
        Ok(tasks) => tasks,
        Err(usage) => {
            tracing::warn!("usage error: {}", usage);
            writeln!(err, "error: {}", usage).context("write usage")?;
            writeln!(err).context("write usage")?;
            writeln!(err, "Usage: mfetch run <GROUP>").context("write usage")?;
            writeln!(err).context("write usage")?;
            writeln!(err, "Groups:").context("write usage")?;
            for name in usage.available() {
                writeln!(err, "  {}", name).context("write usage")?;
            }
            return Ok(RunStatus::Usage);
        }
    };

    tracing::info!(group = %groups[0], tasks = tasks.len(), "running group");
    let summary = run_batch(&tasks, fetcher, out);
    if summary.failed > 0 {
        tracing::warn!("{} of {} downloads failed", summary.failed, summary.total());
    }
    Ok(RunStatus::Completed(summary))
}

/// One-line tally printed after the completion line.
pub fn summary_line(summary: &BatchSummary) -> String {
    format!(
        "{}: {} downloaded, {} already present, {} failed",
        file_count(summary.total()),
        summary.downloaded,
        summary.already_present,
        summary.failed
    )
}
