//! Centralized logging configuration
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to a file instead of stderr, for full-screen frontends
//!
//! # Examples
//!
//! ```no_run
//! use liblessondeck::logging::{LoggingConfig, LogFormat};
//!
//! // JSON lines into a file
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
//!     .with_file("/tmp/lessondeck.log");
//! config.init().expect("log file");
//!
//! // Or layer `LESSONDECK_LOG_*` over the config file section
//! let settings = liblessondeck::config::LoggingSettings::default();
//! liblessondeck::logging::resolve_config(&settings, None, false)
//!     .expect("valid logging settings")
//!     .init()
//!     .expect("logging");
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LoggingSettings;
use crate::error::{self, ConfigError, LessonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    #[default]
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Build from the `[logging]` config section
    pub fn from_settings(settings: &LoggingSettings) -> error::Result<Self> {
        let format = settings
            .format
            .parse::<LogFormat>()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "logging.format".to_string(),
                reason,
            })?;
        let config = Self::new(format, settings.level.clone(), false);
        Ok(match settings.file_path() {
            Some(path) => config.with_file(path),
            None => config,
        })
    }

    /// Apply `LESSONDECK_LOG_FORMAT`, `LESSONDECK_LOG_LEVEL` and
    /// `LESSONDECK_LOG_FILE` where they are set and non-empty
    pub fn with_env_overrides(mut self) -> error::Result<Self> {
        if let Some(raw) = env_value("LESSONDECK_LOG_FORMAT") {
            self.format = raw.parse::<LogFormat>().map_err(LessonError::InvalidInput)?;
        }
        if let Some(level) = env_value("LESSONDECK_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(path) = env_value("LESSONDECK_LOG_FILE") {
            self.file = Some(PathBuf::from(shellexpand::tilde(&path).to_string()));
        }
        Ok(self)
    }

    fn writer(&self) -> std::io::Result<BoxMakeWriter> {
        match &self.file {
            Some(path) => Ok(BoxMakeWriter::new(Mutex::new(open_log_file(path)?))),
            None => Ok(BoxMakeWriter::new(std::io::stderr)),
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program. Fails only
    /// when the log file cannot be opened.
    ///
    /// # Panics
    ///
    /// Panics if the logging subscriber has already been initialized
    pub fn init(&self) -> std::io::Result<()> {
        use tracing_subscriber::EnvFilter;

        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };
        let writer = self.writer()?;
        let ansi = self.file.is_none();

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }

        Ok(())
    }
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Logging setup for a run: the file section, then the environment, then
/// command-line flags
///
/// # Examples
///
/// ```bash
/// export LESSONDECK_LOG_FORMAT=json
/// export LESSONDECK_LOG_LEVEL=debug
/// export LESSONDECK_LOG_FILE=~/lessondeck.log
/// lesson-tui --log-format pretty   # pretty wins over json
/// ```
pub fn resolve_config(
    settings: &LoggingSettings,
    cli_format: Option<LogFormat>,
    verbose: bool,
) -> error::Result<LoggingConfig> {
    let mut config = LoggingConfig::from_settings(settings)?.with_env_overrides()?;
    if let Some(format) = cli_format {
        config.format = format;
    }
    config.verbose = verbose;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result.unwrap_err().contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_new() {
        let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), true);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(config.verbose);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deck.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    fn clear_env() {
        std::env::remove_var("LESSONDECK_LOG_FORMAT");
        std::env::remove_var("LESSONDECK_LOG_LEVEL");
        std::env::remove_var("LESSONDECK_LOG_FILE");
    }

    fn file_settings() -> LoggingSettings {
        LoggingSettings {
            format: "json".to_string(),
            level: "warn".to_string(),
            file: Some("/tmp/from-file.log".to_string()),
        }
    }

    #[test]
    #[serial]
    fn test_file_settings_without_env() {
        clear_env();

        let config = resolve_config(&file_settings(), None, false).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "warn");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/from-file.log")));
        assert!(!config.verbose);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_settings() {
        clear_env();
        std::env::set_var("LESSONDECK_LOG_FORMAT", "pretty");
        std::env::set_var("LESSONDECK_LOG_LEVEL", "trace");
        std::env::set_var("LESSONDECK_LOG_FILE", "/tmp/deck.log");

        let config = resolve_config(&file_settings(), None, false);
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "trace");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/deck.log")));
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        std::env::set_var("LESSONDECK_LOG_FORMAT", "pretty");

        let config = resolve_config(&file_settings(), Some(LogFormat::Text), true);
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.format, LogFormat::Text);
        assert!(config.verbose);
    }

    #[test]
    #[serial]
    fn test_empty_env_values_are_ignored() {
        clear_env();
        std::env::set_var("LESSONDECK_LOG_LEVEL", "");

        let config = resolve_config(&file_settings(), None, false);
        clear_env();

        assert_eq!(config.unwrap().level, "warn");
    }

    #[test]
    #[serial]
    fn test_bad_env_format_is_invalid_input() {
        clear_env();
        std::env::set_var("LESSONDECK_LOG_FORMAT", "yaml");

        let result = resolve_config(&LoggingSettings::default(), None, false);
        clear_env();

        let error = result.unwrap_err();
        assert!(matches!(error, LessonError::InvalidInput(_)));
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_bad_file_format_is_invalid_value() {
        let settings = LoggingSettings {
            format: "yaml".to_string(),
            ..LoggingSettings::default()
        };
        let result = LoggingConfig::from_settings(&settings);
        assert!(matches!(
            result,
            Err(LessonError::Config(ConfigError::InvalidValue { .. }))
        ));
    }
}
