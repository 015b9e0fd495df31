//! CLI for qstrip: inspect and remove URL queries.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qstrip_core::config::{self, QstripConfig};
use qstrip_core::{logging, RemoveQueriesModule, RemoveTarget};
use std::path::PathBuf;

use commands::{run_inspect, run_remove};

/// Top-level CLI for qstrip.
#[derive(Debug, Parser)]
#[command(name = "qstrip")]
#[command(about = "qstrip: list and strip query parameters from URLs", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/qstrip/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how many queries a URL has and the name of each.
    Inspect {
        /// URL (or any string) to inspect.
        url: String,
        /// Print the render instruction as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Remove one query (by index from `inspect`) or all of them.
    Remove {
        /// URL (or any string) to edit.
        url: String,
        /// Index of the query to remove, as listed by `inspect`.
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        index: Option<usize>,
        /// Remove every query.
        #[arg(long)]
        all: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        init_logging(&cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        let module = RemoveQueriesModule::new(cfg.labels);
        match cli.command {
            CliCommand::Inspect { url, json } => run_inspect(&module, &url, json)?,
            CliCommand::Remove { url, index, all } => {
                run_remove(&module, &url, remove_target(index, all))?
            }
        }

        Ok(())
    }
}

/// `--all` wins; clap guarantees exactly one of the two is given.
fn remove_target(index: Option<usize>, all: bool) -> RemoveTarget {
    match index {
        Some(i) if !all => RemoveTarget::Index(i),
        _ => RemoveTarget::All,
    }
}

fn init_logging(cfg: &QstripConfig) {
    let filter = cfg.log_filter.as_deref();
    if let Err(err) = logging::init_logging(filter) {
        logging::init_logging_stderr(filter);
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }
}

#[cfg(test)]
mod tests;
