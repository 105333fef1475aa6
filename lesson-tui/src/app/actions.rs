//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use std::time::Duration;

use crossterm::event::KeyEvent;
use liblessondeck::Language;

/// Actions that trigger state transitions
///
/// Actions are immutable data describing what should happen. The reducer
/// (see `reducer.rs`) applies them to state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input that reached the global keymap
    Key(KeyEvent),

    /// Periodic tick with the time since the previous one
    Tick(Duration),

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Advance one slide
    Next,

    /// Go back one slide
    Previous,

    /// Switch display language
    SetLanguage(Language),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,
}
