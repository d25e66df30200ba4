//! CLI for dsprep.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dsprep_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_find, run_name};

/// Top-level CLI: fetch and locate machine-learning datasets.
#[derive(Debug, Parser)]
#[command(name = "dsprep")]
#[command(about = "dsprep: download, unpack and locate datasets", long_about = None)]
pub struct Cli {
    /// Log to stderr instead of ~/.local/state/dsprep/dsprep.log.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download and unpack a dataset archive (skipped if already done); prints its directory.
    Fetch {
        /// Direct HTTP/HTTPS URL of the archive.
        url: String,

        /// Dataset root directory (default: `data_root` from config.toml).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Find the single path under WHERE matching a glob PATTERN, at any depth.
    Find {
        /// Directory to search.
        r#where: PathBuf,

        /// Glob pattern, e.g. "*.csv" or "train/*.jsonl".
        pattern: String,
    },

    /// Print the archive file name and dataset directory name derived from a URL.
    Name {
        /// Archive URL.
        url: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Fetch { url, root } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let root = root.unwrap_or_else(|| PathBuf::from(&cfg.data_root));
                run_fetch(&url, &root, &cfg)?;
            }
            CliCommand::Find { r#where, pattern } => run_find(&r#where, &pattern)?,
            CliCommand::Name { url } => run_name(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
