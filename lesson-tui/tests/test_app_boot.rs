//! Test application initialization and boot sequence
//!
//! Verifies that the app starts on the configured slide with the right
//! defaults and honours the UI environment overrides.

use lesson_tui::app::{App, AppState, UiConfig};
use lesson_tui::slides::build_registry;
use lesson_tui::stage::Stage;
use liblessondeck::config::UiSettings;
use liblessondeck::content::unit1_vocab;
use liblessondeck::speech::SilentSpeaker;
use liblessondeck::{Language, NavigationState};
use serial_test::serial;

fn nav() -> NavigationState {
    NavigationState::new(10, Language::En).expect("non-empty deck")
}

#[test]
fn test_app_starts_on_first_slide() {
    let state = AppState::new(nav());

    assert_eq!(state.nav.current_index(), 0);
    assert_eq!(state.nav.language(), Language::En);
    assert!(!state.should_quit);
}

#[test]
fn test_no_overlay_on_boot() {
    let state = AppState::new(nav());

    assert!(!state.help_visible);
    assert!(state.error.is_none());
    assert!(!state.overlay_visible());
}

#[test]
fn test_start_slide_is_clamped() {
    let state = AppState::new(nav().with_start(99));
    assert_eq!(state.nav.current_index(), 9);
}

#[test]
fn test_app_mounts_start_slide() {
    let vocab = unit1_vocab();
    let registry = build_registry(&vocab);
    let nav = NavigationState::new(registry.len(), Language::Ru)
        .expect("non-empty deck")
        .with_start(3);

    let app = App::new(
        AppState::new(nav),
        Stage::new(registry, vocab, Box::new(SilentSpeaker)),
    );

    assert_eq!(app.stage.mounted_index(), Some(3));
    assert!(!app.stage.is_transitioning());
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let config = UiConfig::default();
    std::env::remove_var("NO_COLOR");

    assert!(!config.colors_enabled);
    assert!(!config.unicode_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_lessondeck_no_color_env() {
    std::env::set_var("LESSONDECK_NO_COLOR", "1");
    let config = UiConfig::default();
    std::env::remove_var("LESSONDECK_NO_COLOR");

    assert!(!config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("LESSONDECK_TICK_MS", "250");
    let config = UiConfig::default();
    std::env::remove_var("LESSONDECK_TICK_MS");

    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_zero_tick_rate_env_is_ignored() {
    std::env::set_var("LESSONDECK_TICK_MS", "0");
    let config = UiConfig::default();
    std::env::remove_var("LESSONDECK_TICK_MS");

    assert_eq!(config.tick_rate_ms, 100);
}

#[test]
#[serial]
fn test_defaults_from_settings() {
    std::env::remove_var("NO_COLOR");
    std::env::remove_var("LESSONDECK_NO_COLOR");
    std::env::remove_var("LESSONDECK_TICK_MS");

    let config = UiConfig::from_settings(&UiSettings::default());
    assert!(config.colors_enabled);
    assert!(config.unicode_enabled);
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.transition_ms, 400);
}
