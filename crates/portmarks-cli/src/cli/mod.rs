//! CLI for creating portmark files.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use portmarks_core::config::{self, PortmarkConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_filename, run_man, run_render, run_sanitize, run_save};

/// Top-level CLI for Portmarks.
#[derive(Debug, Parser)]
#[command(name = "portmarks")]
#[command(about = "Portmarks: save URLs as portable HTML bookmark files", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/portmarks/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create a portmark file for a URL.
    Save {
        /// URL the portmark redirects to.
        url: String,
        /// Directory to save into (default: config `download_dir`, else the current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Replace an existing file with the same name.
        #[arg(long)]
        force: bool,
    },

    /// Print the filename a URL would be saved under.
    Filename {
        /// URL to convert.
        url: String,
    },

    /// Print a string sanitized for use as a filename.
    Sanitize {
        /// Text to sanitize.
        text: String,
    },

    /// Print the portmark HTML for a URL.
    Render {
        /// URL the portmark redirects to.
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Generate the man page.
    Man,
}

fn load_config(path: Option<&Path>) -> Result<PortmarkConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => load_config(cli.config.as_deref())?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Save { url, dir, force } => run_save(&cfg, &url, dir.as_deref(), force)?,
            CliCommand::Filename { url } => run_filename(&cfg, &url),
            CliCommand::Sanitize { text } => run_sanitize(&cfg, &text),
            CliCommand::Render { url } => run_render(&url)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
