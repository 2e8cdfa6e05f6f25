//! CLI command implementations
//!
//! Commands load the optional configuration, then run the pure
//! conversions from `crate::time` and write one JSON response per
//! result. Every failure is written as a JSON error line before it is
//! returned. Logging happens here, never in the library.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::config::{OutputFormat, StampConfig};
use crate::observability::{log_event, Event, Logger};
use crate::time::{
    datetime_from_uuid, decimal_timestamp_from_uuid, extract_timestamp, timestamp_ticks_from_uuid,
    DecimalTimestamp, TimeBasedIdentifier, TimestampResult,
};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args, writing to stdout
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cmd {
        Command::Extract {
            identifiers,
            format,
            config,
        } => extract(&mut out, &identifiers, format, &config),
        Command::Inspect { identifier, config } => inspect(&mut out, &identifier, &config),
        Command::Now { config } => now(&mut out, &config),
    }
}

/// Writes `err` as a JSON error line and hands it back for propagation.
fn report<W: Write>(out: &mut W, err: CliError) -> CliError {
    // A failing output channel cannot carry its own error; the caller still gets `err`.
    let _ = write_error(out, err.code_str(), err.message());
    err
}

fn load_config<W: Write>(out: &mut W, path: &Path) -> CliResult<(StampConfig, Logger)> {
    let path_str = path.display().to_string();
    match StampConfig::load(path) {
        Ok(config) => {
            let logger = Logger::new(config.log_level);
            logger.trace(Event::ConfigLoaded, &[("path", path_str.as_str())]);
            Ok((config, logger))
        }
        Err(e) => {
            let message = e.to_string();
            log_event(
                &Logger::default(),
                Event::ConfigFailed,
                &[("path", path_str.as_str()), ("reason", message.as_str())],
            );
            Err(report(out, e.into()))
        }
    }
}

fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Renders the embedded timestamp of one identifier.
pub fn render_timestamp(id: TimeBasedIdentifier, format: OutputFormat) -> TimestampResult<Value> {
    Ok(match format {
        OutputFormat::Float => json!(extract_timestamp(id)?),
        OutputFormat::Decimal => json!(decimal_timestamp_from_uuid(id)?.to_string()),
        OutputFormat::Ticks => json!(timestamp_ticks_from_uuid(id)?),
        OutputFormat::Rfc3339 => json!(format_datetime(&datetime_from_uuid(id)?)),
    })
}

fn describe(id: TimeBasedIdentifier, config: &StampConfig) -> TimestampResult<Value> {
    let node: String = id.node().iter().map(|b| format!("{:02x}", b)).collect();

    Ok(json!({
        "identifier": config.render_hex(&id.to_hex()),
        "version": id.version(),
        "clock_sequence": id.clock_sequence(),
        "node": config.render_hex(&node),
        "uuid_ticks": id.ticks(),
        "unix_ticks": timestamp_ticks_from_uuid(id)?,
        "timestamp": extract_timestamp(id)?,
        "decimal": decimal_timestamp_from_uuid(id)?.to_string(),
        "rfc3339": format_datetime(&datetime_from_uuid(id)?),
    }))
}

/// Print the embedded timestamp of each identifier.
///
/// Every identifier gets its own response line; a rejected identifier does
/// not stop the rest. Fails with a partial-failure error if any were
/// rejected.
pub fn extract<W: Write>(
    out: &mut W,
    identifiers: &[String],
    format: Option<OutputFormat>,
    config_path: &Path,
) -> CliResult<()> {
    let (config, logger) = load_config(out, config_path)?;
    let format = format.unwrap_or(config.format);
    let format_str = format.to_string();
    let mut failed = 0;

    for input in identifiers {
        let rendered = TimeBasedIdentifier::parse(input)
            .and_then(|id| render_timestamp(id, format).map(|value| (id, value)));

        match rendered {
            Ok((id, timestamp)) => {
                let hex = config.render_hex(&id.to_hex());
                logger.info(
                    Event::TimestampExtracted,
                    &[("identifier", hex.as_str()), ("format", format_str.as_str())],
                );
                write_response(
                    out,
                    json!({
                        "identifier": hex,
                        "format": format_str,
                        "timestamp": timestamp,
                    }),
                )?;
            }
            Err(e) => {
                failed += 1;
                let message = e.to_string();
                logger.error(
                    Event::IdentifierRejected,
                    &[
                        ("code", e.code()),
                        ("input", input.as_str()),
                        ("reason", message.as_str()),
                    ],
                );
                write_error(out, e.code(), &message)?;
            }
        }
    }

    if failed > 0 {
        return Err(report(out, CliError::partial_failure(failed, identifiers.len())));
    }
    Ok(())
}

/// Print every field and rendering of one identifier.
pub fn inspect<W: Write>(out: &mut W, input: &str, config_path: &Path) -> CliResult<()> {
    let (config, logger) = load_config(out, config_path)?;

    let id = match TimeBasedIdentifier::parse(input) {
        Ok(id) => id,
        Err(e) => {
            let message = e.to_string();
            logger.error(
                Event::IdentifierRejected,
                &[("code", e.code()), ("input", input), ("reason", message.as_str())],
            );
            return Err(report(out, e.into()));
        }
    };

    logger.info(Event::IdentifierParsed, &[("identifier", id.to_hex().as_str())]);

    let description = describe(id, &config).map_err(|e| report(out, e.into()))?;
    write_response(out, description)
}

/// Print the current time as a decimal timestamp.
pub fn now<W: Write>(out: &mut W, config_path: &Path) -> CliResult<()> {
    let (_, logger) = load_config(out, config_path)?;

    let timestamp = DecimalTimestamp::now();
    let rendered = timestamp.to_string();
    logger.trace(Event::ClockRead, &[("timestamp", rendered.as_str())]);

    let datetime = timestamp.to_datetime().map_err(|e| report(out, e.into()))?;
    write_response(
        out,
        json!({
            "timestamp": rendered,
            "rfc3339": format_datetime(&datetime),
        }),
    )
}
