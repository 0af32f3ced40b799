//! Command-line interface for faqadmin.
//!
//! This module provides the CLI structure for the `faqadm` binary. The FAQ
//! actions themselves live on the interactive admin screen; the CLI only
//! carries startup flags and the configuration inspection subcommands.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::ConfigCommand;

/// faqadm - curate the chatbot FAQ collection
///
/// Opens the interactive admin screen by default: view, add, edit, and
/// delete the FAQ entries stored in the JSON file the chatbot answers from.
#[derive(Debug, Parser)]
#[command(name = "faqadm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the FAQ data file (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; omit to open the admin screen
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
