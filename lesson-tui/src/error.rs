//! Error types for lesson-tui
//!
//! Wraps lesson-model errors and terminal/IO errors for unified error
//! handling in the binary.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Lesson model error
    #[error("Lesson error: {0}")]
    Lesson(#[from] liblessondeck::LessonError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event handling error
    #[error("Event error: {0}")]
    Event(String),
}

impl TuiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Lesson(e) => e.exit_code(),
            _ => 1,
        }
    }
}

impl From<liblessondeck::error::ContentError> for TuiError {
    fn from(e: liblessondeck::error::ContentError) -> Self {
        TuiError::Lesson(e.into())
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
