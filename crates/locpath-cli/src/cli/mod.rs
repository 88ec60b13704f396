//! CLI for locpath.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use locpath_core::config;
use locpath_core::navigation::MemoryHistory;
use locpath_core::Locator;

use commands::{
    run_cwd, run_join, run_move, run_normalize, run_parse, run_project, run_split, Projection,
};

/// Top-level CLI for locpath.
#[derive(Debug, Parser)]
#[command(name = "locpath")]
#[command(about = "locpath: URL location parsing and path algebra", long_about = None)]
pub struct Cli {
    /// Active location that relative inputs resolve against (overrides config).
    #[arg(long, global = true, value_name = "URL")]
    pub location: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL and print its components as JSON.
    Parse {
        /// Absolute URL, or a path relative to the active location.
        url: String,
    },

    /// Normalize a path (resolve `.`/`..`, collapse slashes).
    Normalize { path: String },

    /// Join path fragments; a single fragment is joined onto the working directory.
    Join { fragments: Vec<String> },

    /// Split a path into its normalized segments, one per line.
    Split { path: String },

    /// Print the final segment of a path.
    Base { path: String },

    /// Print the extension of a path's final segment.
    Ext { path: String },

    /// Print the directory of a path.
    Dir { path: String },

    /// Resolve a path to an absolute URL.
    ToUrl { path: String },

    /// Print the decoded path of a URL.
    ToPath { url: String },

    /// Print the working directory of the active location.
    Cwd {
        /// Number of directory levels to climb.
        #[arg(long, default_value = "0", value_name = "N")]
        climb: usize,
    },

    /// Move the active location and print the resulting history.
    Move {
        path: String,

        /// Query parameter in form-encoded `KEY=VALUE` form; repeatable.
        #[arg(long = "query", short = 'q', value_name = "KEY=VALUE")]
        query: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let location = cli.location.as_deref().unwrap_or(&cfg.location);
        let locator =
            Locator::new(MemoryHistory::new(location)?).with_query_options(cfg.query_options());

        match cli.command {
            CliCommand::Parse { url } => run_parse(&locator, &url)?,
            CliCommand::Normalize { path } => run_normalize(&path),
            CliCommand::Join { fragments } => run_join(&locator, &fragments)?,
            CliCommand::Split { path } => run_split(&path),
            CliCommand::Base { path } => run_project(&locator, Projection::Base, &path)?,
            CliCommand::Ext { path } => run_project(&locator, Projection::Ext, &path)?,
            CliCommand::Dir { path } => run_project(&locator, Projection::Dir, &path)?,
            CliCommand::ToUrl { path } => run_project(&locator, Projection::Url, &path)?,
            CliCommand::ToPath { url } => run_project(&locator, Projection::Path, &url)?,
            CliCommand::Cwd { climb } => run_cwd(&locator, climb)?,
            CliCommand::Move { path, query } => {
                run_move(&locator, &path, &query, &cfg.query_options())?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
