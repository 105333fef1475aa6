//! Configuration management for the lesson deck
//!
//! Every section is optional; a missing file or missing keys fall back to
//! defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;
use crate::quiz::{DEFAULT_DISTRACTORS, MAX_DISTRACTORS};
use crate::types::Language;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiSettings,
    pub lesson: LessonConfig,
    pub quiz: QuizConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub tick_rate_ms: u64,
    pub colors: bool,
    pub unicode: bool,
    /// Total duration of the exit + enter slide transition
    pub transition_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            colors: true,
            unicode: true,
            transition_ms: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    /// Language code; unknown codes fall back to English
    pub language: String,
    /// 1-based slide number to open on
    pub start_slide: usize,
    pub shuffle_exercises: bool,
    /// Fixed seed for quiz and exercise shuffles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            language: Language::En.code().to_string(),
            start_slide: 1,
            shuffle_exercises: true,
            seed: None,
        }
    }
}

impl LessonConfig {
    pub fn language(&self) -> Language {
        Language::from_code_or_default(&self.language)
    }

    /// 0-based index of the start slide
    pub fn start_index(&self) -> usize {
        self.start_slide.saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub countdown_secs: u64,
    pub distractors: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 15,
            distractors: DEFAULT_DISTRACTORS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub program: String,
    pub voice: String,
    /// Speaking speed at rate 1.0
    pub words_per_minute: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "espeak-ng".to_string(),
            voice: "en-gb".to_string(),
            words_per_minute: 175,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Configured log file with `~` expanded
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.tick_rate_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if self.quiz.countdown_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quiz.countdown_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if !(1..=MAX_DISTRACTORS).contains(&self.quiz.distractors) {
            return Err(ConfigError::InvalidValue {
                field: "quiz.distractors".to_string(),
                reason: format!("must be between 1 and {}", MAX_DISTRACTORS),
            }
            .into());
        }
        if let Err(reason) = self.logging.format.parse::<LogFormat>() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format".to_string(),
                reason,
            }
            .into());
        }
        if self.speech.enabled && self.speech.program.trim().is_empty() {
            return Err(ConfigError::MissingField("speech.program".to_string()).into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("LESSONDECK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("lessondeck").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("lessondeck"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LessonError;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.transition_ms, 400);
        assert_eq!(config.lesson.language(), Language::En);
        assert_eq!(config.lesson.start_index(), 0);
        assert_eq!(config.quiz.countdown_secs, 15);
        assert_eq!(config.quiz.distractors, 3);
        assert_eq!(config.speech.program, "espeak-ng");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[lesson]
language = "ru"
start_slide = 12
seed = 7

[speech]
enabled = false
"#,
        );

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.lesson.language(), Language::Ru);
        assert_eq!(config.lesson.start_index(), 11);
        assert_eq!(config.lesson.seed, Some(7));
        assert!(!config.speech.enabled);
        assert_eq!(config.speech.voice, "en-gb");
        assert_eq!(config.ui, UiSettings::default());
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let file = write_config("[lesson]\nlanguage = \"fr\"\n");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.lesson.language(), Language::En);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("[ui\ntick_rate_ms = ");
        let result = Config::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(LessonError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let file = write_config("[ui]\ntick_rate_ms = 0\n");
        let result = Config::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(LessonError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_distractors_outside_digit_keys_rejected() {
        for content in ["[quiz]\ndistractors = 0\n", "[quiz]\ndistractors = 9\n"] {
            let file = write_config(content);
            let result = Config::load_from_path(file.path());
            assert!(
                matches!(
                    result,
                    Err(LessonError::Config(ConfigError::InvalidValue { ref field, .. }))
                        if field == "quiz.distractors"
                ),
                "{content:?} was accepted"
            );
        }
    }

    #[test]
    fn test_distractor_range_ends_accepted() {
        for distractors in [1, MAX_DISTRACTORS] {
            let file = write_config(&format!("[quiz]\ndistractors = {}\n", distractors));
            let config = Config::load_from_path(file.path()).unwrap();
            assert_eq!(config.quiz.distractors, distractors);
        }
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let file = write_config("[logging]\nformat = \"yaml\"\n");
        let result = Config::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(LessonError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_start_slide_zero_means_first() {
        let lesson = LessonConfig {
            start_slide: 0,
            ..LessonConfig::default()
        };
        assert_eq!(lesson.start_index(), 0);
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_from_env() {
        std::env::set_var("LESSONDECK_CONFIG", "/tmp/lessondeck-test.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("LESSONDECK_CONFIG");
        assert_eq!(path, PathBuf::from("/tmp/lessondeck-test.toml"));
    }

    #[test]
    #[serial]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        std::env::set_var("LESSONDECK_CONFIG", &path);
        let config = Config::load();
        std::env::remove_var("LESSONDECK_CONFIG");
        assert_eq!(config.unwrap(), Config::default());
    }
}
