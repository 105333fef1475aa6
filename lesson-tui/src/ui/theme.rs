//! Colors and symbols shared by every slide
//!
//! When colors are disabled every style helper returns a plain style, and
//! when unicode is disabled symbols fall back to ASCII.

use ratatui::style::{Color, Modifier, Style};

use crate::app::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: bool,
    pub unicode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: true,
            unicode: true,
        }
    }
}

impl From<&UiConfig> for Theme {
    fn from(config: &UiConfig) -> Self {
        Self {
            colors: config.colors_enabled,
            unicode: config.unicode_enabled,
        }
    }
}

impl Theme {
    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    pub fn title(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        self.fg(Color::Yellow)
    }

    pub fn secondary(&self) -> Style {
        self.fg(Color::Magenta)
    }

    pub fn muted(&self) -> Style {
        self.fg(Color::Gray)
    }

    pub fn success(&self) -> Style {
        self.fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn failure(&self) -> Style {
        self.fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Highlight for the item under the cursor
    pub fn cursor(&self) -> Style {
        if self.colors {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Style for a checked answer: `None` before checking
    pub fn verdict(&self, result: Option<bool>) -> Style {
        match result {
            Some(true) => self.success(),
            Some(false) => self.failure(),
            None => Style::default(),
        }
    }

    pub fn tick_mark(&self) -> &'static str {
        if self.unicode {
            "✓"
        } else {
            "[ok]"
        }
    }

    pub fn cross_mark(&self) -> &'static str {
        if self.unicode {
            "✗"
        } else {
            "[x]"
        }
    }

    pub fn warning_mark(&self) -> &'static str {
        if self.unicode {
            "⚠"
        } else {
            "!"
        }
    }

    pub fn speaker_mark(&self) -> &'static str {
        if self.unicode {
            "🔊"
        } else {
            "(s)"
        }
    }

    /// Marker for a result, empty before checking
    pub fn verdict_mark(&self, result: Option<bool>) -> &'static str {
        match result {
            Some(true) => self.tick_mark(),
            Some(false) => self.cross_mark(),
            None => "",
        }
    }

    pub fn bar_filled(&self) -> char {
        if self.unicode {
            '█'
        } else {
            '#'
        }
    }

    pub fn bar_empty(&self) -> char {
        if self.unicode {
            '░'
        } else {
            '-'
        }
    }

    /// Text progress bar `width` cells wide
    pub fn bar(&self, fraction: f64, width: usize) -> String {
        let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        let mut bar = String::with_capacity(width * 3);
        bar.extend(std::iter::repeat(self.bar_filled()).take(filled));
        bar.extend(std::iter::repeat(self.bar_empty()).take(width - filled));
        bar
    }
}
