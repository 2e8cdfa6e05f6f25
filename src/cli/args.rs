//! CLI argument definitions using clap
//!
//! Commands:
//! - uuidstamp extract <ID>... [--format <FORMAT>] [--config <path>]
//! - uuidstamp inspect <ID> [--config <path>]
//! - uuidstamp now [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{OutputFormat, DEFAULT_CONFIG_PATH};

/// uuidstamp - read the timestamps embedded in version 1 UUIDs
#[derive(Parser, Debug)]
#[command(name = "uuidstamp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Unix timestamp embedded in each identifier
    Extract {
        /// Identifiers, as hex with or without dashes
        #[arg(required = true)]
        identifiers: Vec<String>,

        /// Output format; overrides the configuration file
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Print every field and timestamp rendering of one identifier
    Inspect {
        identifier: String,

        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Print the current time as a decimal timestamp
    Now {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
