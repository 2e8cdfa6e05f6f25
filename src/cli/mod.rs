//! CLI module for uuidstamp
//!
//! Provides command-line interface for:
//! - extract: Print the timestamps embedded in identifiers
//! - inspect: Print every field of one identifier
//! - now: Print the current decimal timestamp

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{extract, inspect, now, render_timestamp, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
