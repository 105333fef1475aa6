//! Render smoke tests against ratatui's TestBackend
//!
//! Every slide in the deck is drawn in every language, including on a tiny
//! terminal, to catch layout panics.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lesson_tui::app::{Action, App, AppState};
use lesson_tui::slides::build_registry;
use lesson_tui::stage::Stage;
use lesson_tui::ui::theme::Theme;
use liblessondeck::content::unit1_vocab;
use liblessondeck::speech::SilentSpeaker;
use liblessondeck::{Language, NavigationState};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn app(theme: Theme) -> App {
    let vocab = unit1_vocab();
    let registry = build_registry(&vocab);
    let nav = NavigationState::new(registry.len(), Language::En).expect("non-empty deck");
    let stage = Stage::new(registry, vocab, Box::new(SilentSpeaker))
        .with_theme(theme)
        .with_transition(Duration::from_millis(400));
    App::new(AppState::new(nav), stage)
}

fn draw(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| app.draw(frame)).expect("draw");
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.dispatch(Action::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[test]
fn test_every_slide_renders_in_every_language() {
    let mut app = app(Theme::default());
    let len = app.state.nav.len();

    for index in 0..len {
        for (key, _) in [(2, Language::En), (3, Language::Ru), (4, Language::Uz)] {
            press(&mut app, KeyCode::F(key));
            draw(&app, 100, 30);
        }
        // Mid-transition frames too
        app.dispatch(Action::Tick(Duration::from_millis(100)));
        draw(&app, 100, 30);
        app.dispatch(Action::Tick(Duration::from_millis(200)));
        draw(&app, 100, 30);

        if index + 1 < len {
            press(&mut app, KeyCode::Right);
        }
    }
    assert_eq!(app.state.nav.current_index(), len - 1);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app(Theme::default());
    for _ in 0..app.state.nav.len() {
        draw(&app, 20, 6);
        press(&mut app, KeyCode::Right);
    }
}

#[test]
fn test_chrome_shows_title_and_position() {
    let app = app(Theme::default());
    let screen = text(&draw(&app, 100, 30));

    assert!(screen.contains("Unit 1: Communication"));
    assert!(screen.contains(&format!("1 / {}", app.state.nav.len())));
    assert!(screen.contains("EN"));
}

#[test]
fn test_help_overlay_is_drawn() {
    let mut app = app(Theme::default());
    press(&mut app, KeyCode::F(1));
    let screen = text(&draw(&app, 100, 30));
    assert!(screen.contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::F(3));
    let screen = text(&draw(&app, 100, 30));
    assert!(screen.contains("Горячие клавиши"));
}

#[test]
fn test_error_overlay_is_drawn() {
    let mut app = app(Theme::default());
    app.dispatch(Action::ShowError("speech program missing".to_string()));
    let screen = text(&draw(&app, 100, 30));
    assert!(screen.contains("speech program missing"));
}

#[test]
fn test_ascii_theme_renders() {
    let mut app = app(Theme {
        colors: false,
        unicode: false,
    });
    for _ in 0..app.state.nav.len() {
        draw(&app, 80, 24);
        press(&mut app, KeyCode::Right);
    }
}
