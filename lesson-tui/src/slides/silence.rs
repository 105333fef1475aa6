//! The silence experiment: how long can the class stay quiet?

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{SILENCE_BLURB, SILENCE_RING_SECS};
use liblessondeck::timer::Stopwatch;
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new("The Silence Experiment", "Эксперимент с молчанием", "Sukunat tajribasi");
const START: Phrase = Phrase::new("Start", "Старт", "Boshlash");
const PAUSE: Phrase = Phrase::new("Pause", "Пауза", "To'xtatish");

/// The ring changes color once the silence gets uncomfortable
const CALM_SECS: u64 = 10;

#[derive(Debug, Default)]
pub struct SilenceExperiment {
    stopwatch: Stopwatch,
}

impl SilenceExperiment {
    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }
}

impl Slide for SilenceExperiment {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [blurb, clock, ring, state] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(t(props.lang, &SILENCE_BLURB))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            blurb,
        );

        let secs = self.stopwatch.elapsed_secs();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{:02}:{:02}", secs / 60, secs % 60),
                theme.title(),
            )))
            .alignment(Alignment::Center),
            clock,
        );

        let ring_color = if secs > CALM_SECS {
            Color::Magenta
        } else {
            Color::Yellow
        };
        let gauge_style = if theme.colors {
            Style::default().fg(ring_color)
        } else {
            Style::default()
        };
        frame.render_widget(
            Gauge::default()
                .gauge_style(gauge_style)
                .ratio(self.stopwatch.ring_progress(SILENCE_RING_SECS))
                .label(""),
            ring,
        );

        let action = if self.stopwatch.is_running() {
            &PAUSE
        } else {
            &START
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!("[ {} ]", t(props.lang, action)), theme.accent()))
                .alignment(Alignment::Center),
            state,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Enter => self.stopwatch.toggle(),
            KeyCode::Char('r') => self.stopwatch.reset(),
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn tick(&mut self, elapsed: Duration) {
        self.stopwatch.tick(elapsed);
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_SILENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use liblessondeck::Language;

    #[test]
    fn test_counts_only_while_running() {
        let props = props(Language::En);
        let mut slide = SilenceExperiment::default();

        slide.tick(Duration::from_secs(5));
        assert_eq!(slide.elapsed_secs(), 0);

        slide.handle_key(key(KeyCode::Enter), &props);
        slide.tick(Duration::from_secs(3));
        assert_eq!(slide.elapsed_secs(), 3);

        slide.handle_key(key(KeyCode::Enter), &props);
        slide.tick(Duration::from_secs(3));
        assert_eq!(slide.elapsed_secs(), 3);

        slide.handle_key(key(KeyCode::Char('r')), &props);
        assert_eq!(slide.elapsed_secs(), 0);
        assert!(!slide.is_running());
    }
}
