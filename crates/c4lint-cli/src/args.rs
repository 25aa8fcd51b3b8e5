//! Command-line argument definitions for the c4lint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects between linting diagrams and
//! analyzing the system network; configuration file selection and logging
//! verbosity apply to both.

use clap::{Parser, Subcommand};

/// Command-line arguments for the C4 diagram linter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// What to do with the diagrams.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint a diagram file, or every diagram under a directory
    Lint(LintArgs),

    /// Join the systems of every diagram under a directory into one graph
    Network(NetworkArgs),
}

/// Arguments of the `lint` subcommand.
#[derive(clap::Args, Debug)]
pub struct LintArgs {
    /// Diagram file or directory to lint
    #[arg(help = "Path to a .drawio file or a directory")]
    pub input: String,

    /// File with known software system names, one per line
    #[arg(long)]
    pub names: Option<String>,

    /// Append element ids to missing-attribute findings
    #[arg(long)]
    pub include_ids: bool,

    /// Append the normalized model to each report
    #[arg(long)]
    pub export: bool,

    /// Skip the `C4 L<x> <name>.drawio` file name check
    #[arg(long)]
    pub no_filename_check: bool,

    /// Write reports to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments of the `network` subcommand.
#[derive(clap::Args, Debug)]
pub struct NetworkArgs {
    /// Directory to analyze
    #[arg(help = "Directory containing .drawio files")]
    pub input: String,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
