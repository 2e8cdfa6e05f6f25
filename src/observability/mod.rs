//! Observability for uuidstamp
//!
//! Structured logging only. The `time` module never logs; the CLI logs
//! around each command so that the library stays pure.
//!
//! # Usage
//!
//! ```ignore
//! use uuidstamp::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! logger.info(Event::TimestampExtracted, &[("identifier", "1e1d9a80...")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at the severity it implies
pub fn log_event(logger: &Logger, event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    logger.log(severity, event, fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        let logger = Logger::new(Severity::Fatal);
        log_event(&logger, Event::ConfigLoaded, &[]);
        log_event(&logger, Event::ConfigFailed, &[("path", "/tmp/missing.json")]);
    }
}
