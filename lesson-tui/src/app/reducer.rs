//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`.
//! It has no side effects; mounting slides, speech and drawing happen
//! outside it.

use super::actions::Action;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use liblessondeck::Language;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No terminal I/O
/// - No speech
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick(_) => state, // Slide timers advance on the stage
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Next => {
            let mut nav = state.nav;
            nav.next();
            AppState { nav, ..state }
        }

        Action::Previous => {
            let mut nav = state.nav;
            nav.previous();
            AppState { nav, ..state }
        }

        Action::SetLanguage(language) => {
            let mut nav = state.nav;
            nav.set_language(language);
            AppState { nav, ..state }
        }

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },
    }
}

/// Whether `key` belongs to the global keymap rather than the slide
///
/// While a slide captures text only the function keys and `Ctrl+C` stay
/// global, so typing never navigates away.
pub fn is_global_key(key: &KeyEvent, slide_captures_input: bool) -> bool {
    let always = matches!(
        (key.code, key.modifiers),
        (KeyCode::F(1..=4), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    );
    always
        || (!slide_captures_input
            && matches!(
                (key.code, key.modifiers),
                (KeyCode::Right, _)
                    | (KeyCode::Left, _)
                    | (KeyCode::Char(' '), KeyModifiers::NONE)
                    | (KeyCode::Char('q'), KeyModifiers::NONE)
                    | (KeyCode::Esc, _)
            ))
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere, even over overlays)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Language switcher
        (KeyCode::F(2), _) => return reduce(state, Action::SetLanguage(Language::En)),
        (KeyCode::F(3), _) => return reduce(state, Action::SetLanguage(Language::Ru)),
        (KeyCode::F(4), _) => return reduce(state, Action::SetLanguage(Language::Uz)),

        // Dismiss error
        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        // Hide help
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.overlay_visible() {
        return state;
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => reduce(state, Action::Next),
        KeyCode::Left => reduce(state, Action::Previous),
        _ => state,
    }
}
