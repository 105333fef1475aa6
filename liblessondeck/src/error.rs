//! Error types for the lesson deck

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LessonError>;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LessonError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LessonError::InvalidInput(_) => 3,
            LessonError::Config(_) => 1,
            LessonError::Content(_) => 1,
            LessonError::Speech(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Problems with the static lesson tables.
///
/// These are data-integrity preconditions; the shipped content never
/// triggers them, but tables supplied by tests or future lessons might.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Slide deck is empty")]
    EmptyDeck,

    #[error("Duplicate vocabulary id: {0}")]
    DuplicateVocabId(String),
}

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Failed to start speech program: {0}")]
    Spawn(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = LessonError::InvalidInput("Unknown language".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = LessonError::Config(ConfigError::MissingField("ui.tick_rate_ms".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_content_error() {
        let error = LessonError::Content(ContentError::EmptyDeck);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_content() {
        let error = LessonError::Content(ContentError::DuplicateVocabId("adapt".to_string()));
        assert_eq!(
            format!("{}", error),
            "Content error: Duplicate vocabulary id: adapt"
        );
    }

    #[test]
    fn test_error_message_formatting_speech() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = LessonError::Speech(SpeechError::Spawn(io));
        assert_eq!(
            format!("{}", error),
            "Speech error: Failed to start speech program: no such file"
        );
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let lesson_error: LessonError = config_error.into();

        match lesson_error {
            LessonError::Config(_) => {}
            _ => panic!("Expected LessonError::Config"),
        }
    }

    #[test]
    fn test_error_conversion_from_io_error_into_speech() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "espeak-ng");
        let lesson_error: LessonError = SpeechError::from(io).into();

        match lesson_error {
            LessonError::Speech(SpeechError::Spawn(_)) => {}
            _ => panic!("Expected LessonError::Speech"),
        }
    }
}
