//! Navigation controller
//!
//! Holds the current slide index and display language. Movement clamps at
//! both ends of the deck; it never wraps.

use tracing::debug;

use crate::error::ContentError;
use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    len: usize,
    language: Language,
}

impl NavigationState {
    /// Start at the first slide of a deck of `len` slides
    pub fn new(len: usize, language: Language) -> Result<Self, ContentError> {
        if len == 0 {
            return Err(ContentError::EmptyDeck);
        }

        Ok(Self {
            current_index: 0,
            len,
            language,
        })
    }

    /// Move to `index`, clamped to the last slide
    pub fn with_start(mut self, index: usize) -> Self {
        self.current_index = index.min(self.len - 1);
        self
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn can_next(&self) -> bool {
        self.current_index + 1 < self.len
    }

    pub fn can_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Advance one slide. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Go back one slide. Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!(from = %self.language, to = %language, "Language changed");
        }
        self.language = language;
    }

    /// Fraction of the deck reached, in `(0, 1]`
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.len as f64
    }

    pub fn is_last(&self) -> bool {
        !self.can_next()
    }
}
