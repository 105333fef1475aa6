//! Glue between the reducer and the stage
//!
//! [`App::dispatch`] is the single entry point for everything the event loop
//! receives. Keys go to the mounted slide first unless they belong to the
//! global keymap; everything else goes through the reducer, after which the
//! stage is synced to the navigation index.

use ratatui::Frame;

use super::actions::Action;
use super::reducer::{is_global_key, reduce};
use super::state::AppState;
use crate::slides::SlideResponse;
use crate::stage::Stage;
use crate::ui;

pub struct App {
    pub state: AppState,
    pub stage: Stage,
}

impl App {
    /// Wire state and stage together and mount the starting slide
    pub fn new(state: AppState, stage: Stage) -> Self {
        let mut app = Self { state, stage };
        app.stage.sync(app.state.nav.current_index());
        app
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = match action.into() {
            Action::Key(key)
                if !self.state.overlay_visible()
                    && !is_global_key(&key, self.stage.captures_input()) =>
            {
                let response = self.stage.handle_key(key, self.state.nav.language());
                if let Some(message) = self.stage.take_speech_error() {
                    self.state = reduce(self.state.clone(), Action::ShowError(message));
                }
                match response {
                    SlideResponse::Advance => Action::Next,
                    _ => return,
                }
            }
            Action::Tick(elapsed) => {
                self.stage.tick(elapsed);
                return;
            }
            other => other,
        };

        let language = self.state.nav.language();
        self.state = reduce(self.state.clone(), action);

        if self.state.nav.language() != language {
            tracing::info!(language = %self.state.nav.language(), "Language changed");
        }
        self.stage.sync(self.state.nav.current_index());
    }

    pub fn draw(&self, frame: &mut Frame) {
        ui::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::build_registry;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use liblessondeck::content::unit1_vocab;
    use liblessondeck::speech::SilentSpeaker;
    use liblessondeck::{Language, NavigationState};

    fn app() -> App {
        let vocab = unit1_vocab();
        let registry = build_registry(&vocab);
        let nav = NavigationState::new(registry.len(), Language::En).expect("non-empty deck");
        App::new(AppState::new(nav), Stage::new(registry, vocab, Box::new(SilentSpeaker)))
    }

    fn key(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_on_intro_advances() {
        let mut app = app();
        app.dispatch(key(KeyCode::Enter));
        assert_eq!(app.state.nav.current_index(), 1);
        assert_eq!(app.stage.mounted_index(), Some(1));
    }

    #[test]
    fn test_help_overlay_swallows_slide_keys() {
        let mut app = app();
        app.dispatch(Action::Key(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)));
        assert!(app.state.help_visible);

        app.dispatch(key(KeyCode::Enter));
        assert_eq!(app.state.nav.current_index(), 0);

        app.dispatch(key(KeyCode::Esc));
        assert!(!app.state.help_visible);
    }

    #[test]
    fn test_ticks_do_not_touch_state() {
        let mut app = app();
        let before = app.state.clone();
        app.dispatch(Action::Tick(std::time::Duration::from_millis(100)));
        assert_eq!(app.state, before);
    }
}
