//! Configuration file
//!
//! Optional JSON file, default `./uuidstamp.json`. A missing file means
//! defaults; a present but malformed file is an error. Unknown keys are
//! rejected so typos surface instead of silently falling back.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;

/// Default configuration path
pub const DEFAULT_CONFIG_PATH: &str = "./uuidstamp.json";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// How extracted timestamps are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Floating point Unix seconds
    #[default]
    Float,
    /// Unix seconds with six fractional digits
    Decimal,
    /// 100 ns ticks since the Unix epoch
    Ticks,
    /// RFC 3339 UTC date-time
    Rfc3339,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Float => "float",
            OutputFormat::Decimal => "decimal",
            OutputFormat::Ticks => "ticks",
            OutputFormat::Rfc3339 => "rfc3339",
        };
        write!(f, "{}", name)
    }
}

/// uuidstamp configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampConfig {
    /// Timestamp rendering (default: float)
    #[serde(default)]
    pub format: OutputFormat,

    /// Minimum log severity (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    /// Print identifiers in uppercase hex (default: false)
    #[serde(default)]
    pub uppercase_hex: bool,
}

fn default_log_level() -> Severity {
    Severity::Info
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
            uppercase_hex: false,
        }
    }
}

impl StampConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Renders an identifier's hex form according to `uppercase_hex`.
    pub fn render_hex(&self, hex: &str) -> String {
        if self.uppercase_hex {
            hex.to_ascii_uppercase()
        } else {
            hex.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StampConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, StampConfig::default());
        assert_eq!(config.format, OutputFormat::Float);
        assert_eq!(config.log_level, Severity::Info);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config(r#"{"format": "rfc3339"}"#);
        let config = StampConfig::load(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Rfc3339);
        assert_eq!(config.log_level, Severity::Info);
        assert!(!config.uppercase_hex);
    }

    #[test]
    fn test_full_file() {
        let file =
            write_config(r#"{"format": "ticks", "log_level": "warn", "uppercase_hex": true}"#);
        let config = StampConfig::load(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Ticks);
        assert_eq!(config.log_level, Severity::Warn);
        assert_eq!(config.render_hex("ab12"), "AB12");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{"fromat": "float"}"#);
        let err = StampConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("fromat"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let file = write_config(r#"{"format": "hex"}"#);
        assert!(StampConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = StampConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
