//! CLI for mfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mfetch_core::catalog;
use mfetch_core::config::{self, FetchOptions};
use mfetch_core::fetcher::Fetcher;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_group, run_list, summary_line, RunStatus};

/// Exit status for a bad group selection (same as clap's usage errors).
const USAGE_EXIT: u8 = 2;

/// Top-level CLI for mfetch.
#[derive(Debug, Parser)]
#[command(name = "mfetch")]
#[command(about = "mfetch: download model weights into a models directory", long_about = None)]
pub struct Cli {
    /// Base models directory; files land in category subdirectories under it.
    #[arg(long, global = true, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,

    /// Omitted: same as `run` with no group, which prints the group list.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one group of models (or `all`), skipping files already present.
    Run {
        /// Group name, or `all` for every group. Run `mfetch list` to see groups.
        #[arg(value_name = "GROUP")]
        groups: Vec<String>,
    },

    /// List groups and the files each one installs.
    List,
}

impl CliCommand {
    /// No subcommand goes down the `run` path so the usage lists the groups.
    pub fn or_usage(command: Option<CliCommand>) -> CliCommand {
        command.unwrap_or(CliCommand::Run { groups: Vec::new() })
    }

    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let models_dir = config::models_dir(cli.models_dir);
        tracing::debug!("models dir: {}", models_dir.display());
        let catalog = catalog::builtin(&models_dir);

        let stdout = io::stdout();
        let stderr = io::stderr();
        match CliCommand::or_usage(cli.command) {
            CliCommand::Run { groups } => {
                let fetcher = Fetcher::curl(&FetchOptions::default());
                let status = run_group(
                    &catalog,
                    &groups,
                    &fetcher,
                    &mut stdout.lock(),
                    &mut stderr.lock(),
                )?;
                Ok(match status {
                    RunStatus::Completed(summary) => {
                        println!("{}", summary_line(&summary));
                        ExitCode::SUCCESS
                    }
                    RunStatus::Usage => ExitCode::from(USAGE_EXIT),
                })
            }
            CliCommand::List => {
                run_list(&catalog, &models_dir, &mut stdout.lock())?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
