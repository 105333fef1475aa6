//! Application state
//!
//! Plain state structure; all transitions happen through the reducer
//! (see `reducer.rs`). Per-slide exercise state is not here: it belongs to
//! the mounted slide and lives on the stage.

use liblessondeck::config::UiSettings;
use liblessondeck::NavigationState;

/// Root application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Current slide and language
    pub nav: NavigationState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Slide transition length in milliseconds
    pub transition_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_settings(&UiSettings::default())
    }
}

impl UiConfig {
    /// Apply environment overrides on top of file settings
    ///
    /// `NO_COLOR` or `LESSONDECK_NO_COLOR` turn colors and unicode off;
    /// `LESSONDECK_TICK_MS` replaces the tick rate.
    pub fn from_settings(settings: &UiSettings) -> Self {
        let no_color = std::env::var("NO_COLOR").is_ok()
            || std::env::var("LESSONDECK_NO_COLOR").is_ok();

        let colors_enabled = settings.colors && !no_color;
        let unicode_enabled = settings.unicode && !no_color;

        let tick_rate_ms = std::env::var("LESSONDECK_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(settings.tick_rate_ms);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
            transition_ms: settings.transition_ms,
        }
    }
}

impl AppState {
    /// Create new application state positioned by `nav`
    pub fn new(nav: NavigationState) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            nav,
            error: None,
            config: UiConfig::default(),
        }
    }

    pub fn with_config(self, config: UiConfig) -> Self {
        Self { config, ..self }
    }

    /// Whether an overlay is swallowing keys
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }
}
