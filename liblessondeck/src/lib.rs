//! Lesson Deck - an interactive language-learning slide deck
//!
//! This library owns everything about the lesson that is not drawing:
//! the content tables, translation, the slide registry with its vocabulary
//! expansion, navigation, quiz generation and the exercise state machines.
//! Frontends bind each slide kind to their own renderer.

pub mod config;
pub mod content;
pub mod error;
pub mod exercise;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod quiz;
pub mod registry;
pub mod speech;
pub mod timer;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{LessonError, Result};
pub use i18n::{resolve, t, Localized};
pub use navigation::NavigationState;
pub use quiz::VocabQuiz;
pub use registry::{Registry, SlideData, SlideDescriptor};
pub use speech::{Speaker, SpeechRequest};
pub use types::{Language, LocalizedText, Phrase, SlideKind, VocabEntry};
