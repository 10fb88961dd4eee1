//! `mfetch list` – show groups and their files.

use anyhow::Result;
use mfetch_core::catalog::{Catalog, ALL_GROUPS};
use std::io::Write;
use std::path::Path;

use super::file_count;

pub fn run_list<W: Write>(catalog: &Catalog, models_dir: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "Models directory: {}", models_dir.display())?;
    let mut total = 0usize;
    for group in catalog.groups() {
        writeln!(out)?;
        writeln!(out, "{} ({})", group.name, file_count(group.tasks.len()))?;
        for task in &group.tasks {
            let rel = task
                .destination
                .strip_prefix(models_dir)
                .unwrap_or(&task.destination);
            writeln!(out, "  {}", rel.display())?;
            writeln!(out, "      {}", task.source_url)?;
        }
        total += group.tasks.len();
    }
    writeln!(out)?;
    writeln!(out, "{} ({})", ALL_GROUPS, file_count(total))?;
    Ok(())
}
