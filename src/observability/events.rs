//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in uuidstamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded (or defaults applied)
    ConfigLoaded,
    /// Configuration could not be loaded
    ConfigFailed,
    /// Identifier parsed from user input
    IdentifierParsed,
    /// Identifier input rejected
    IdentifierRejected,
    /// Timestamp extracted from an identifier
    TimestampExtracted,
    /// Current time read
    ClockRead,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigFailed => "CONFIG_FAILED",
            Event::IdentifierParsed => "IDENTIFIER_PARSED",
            Event::IdentifierRejected => "IDENTIFIER_REJECTED",
            Event::TimestampExtracted => "TIMESTAMP_EXTRACTED",
            Event::ClockRead => "CLOCK_READ",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ConfigFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
