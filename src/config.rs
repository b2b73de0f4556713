//! Configuration management for the phone-canon binary.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. Stdout carries results, so nothing here prints.

use crate::error::{ConfigError, ConfigResult};
use crate::formatter::DisplayStyle;
use std::env;
use std::fmt;
use std::str::FromStr;

/// What the binary does with each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Lenient recognizer plus display form, one cell per line
    #[default]
    Clean,
    /// Strict validator over a multi-value phone cell per line
    Validate,
    /// Display formatter over one canonical number per line
    Format,
    /// Strict contact-row validation, one JSON row per line
    Upload,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clean" => Ok(Self::Clean),
            "validate" => Ok(Self::Validate),
            "format" => Ok(Self::Format),
            "upload" => Ok(Self::Upload),
            other => Err(format!(
                "Must be one of clean, validate, format, upload, got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clean => "clean",
            Self::Validate => "validate",
            Self::Format => "format",
            Self::Upload => "upload",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for the phone-canon binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Processing mode (default: clean)
    pub mode: Mode,

    /// Display style for rendered numbers (default: plain)
    pub style: DisplayStyle,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_CANON_MODE`: `clean`, `validate`, `format`, or `upload` (default: clean)
    /// - `PHONE_CANON_HTML`: render HTML-safe display forms (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let mode = match env::var("PHONE_CANON_MODE") {
            Ok(val) => val.parse::<Mode>().map_err(|reason| ConfigError::InvalidValue {
                var: "PHONE_CANON_MODE".to_string(),
                reason,
            })?,
            Err(_) => Mode::default(),
        };

        let html = Self::parse_env_bool("PHONE_CANON_HTML", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            mode,
            style: DisplayStyle::from(html),
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Clean,
            style: DisplayStyle::Plain,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Clean);
        assert_eq!(config.style, DisplayStyle::Plain);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("clean".parse::<Mode>(), Ok(Mode::Clean));
        assert_eq!(" Validate ".parse::<Mode>(), Ok(Mode::Validate));
        assert_eq!("FORMAT".parse::<Mode>(), Ok(Mode::Format));
        assert_eq!("upload".parse::<Mode>(), Ok(Mode::Upload));
        assert!("scrub".parse::<Mode>().is_err());
        assert_eq!(Mode::Upload.to_string(), "upload");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("PHONE_CANON_MODE");
        guard.unset("PHONE_CANON_HTML");

        let config = Config::from_env().unwrap();
        assert_eq!(config.mode, Mode::Clean);
        assert_eq!(config.style, DisplayStyle::Plain);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("PHONE_CANON_MODE", "validate");
        guard.set("PHONE_CANON_HTML", "true");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.mode, Mode::Validate);
        assert_eq!(config.style, DisplayStyle::Html);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_mode() {
        let mut guard = EnvGuard::new();
        guard.set("PHONE_CANON_MODE", "scrub");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "PHONE_CANON_MODE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_YES", "yes");
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_YES", false).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", false).is_err());
    }
}
