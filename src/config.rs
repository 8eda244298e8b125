//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book snapshot.
pub const DEFAULT_ADDRESS_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book snapshot is loaded from and saved to
    pub address_book_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Snapshot file (default: `addressbook.json`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy does not print to stdout
        let _ = dotenvy::dotenv();

        let address_book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Must be valid UTF-8".to_string(),
                });
            }
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config {
            address_book_path,
            log_level,
        })
    }

    /// Read a tracing level name, falling back to `default` when unset.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                match level.as_str() {
                    "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(level),
                    _ => Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!(
                            "Must be one of trace, debug, info, warn, error, off; got: {}",
                            val
                        ),
                    }),
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
            log_level: "error".to_string(),
        }
    }
}
