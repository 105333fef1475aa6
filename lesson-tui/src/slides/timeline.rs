//! Animated present perfect timelines

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{Timeline, TIMELINE_CONTINUOUS, TIMELINE_SIMPLE};
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;
use crate::ui::theme::Theme;

const PAST: Phrase = Phrase::new("PAST", "ПРОШЛОЕ", "O'TMISH");
const NOW: Phrase = Phrase::new("NOW", "СЕЙЧАС", "HOZIR");

/// When the past event appears on the simple timeline
const EVENT_AT: Duration = Duration::from_millis(500);
/// When the result arrow starts growing on the simple timeline
const ARROW_FROM: Duration = Duration::from_millis(1000);
const ARROW_FOR: Duration = Duration::from_millis(2000);
/// The continuous wave grows for the whole animation
const WAVE_FOR: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone)]
pub struct TimelineSlide {
    timeline: &'static Timeline,
    elapsed: Duration,
}

impl TimelineSlide {
    pub fn new(timeline: &'static Timeline) -> Self {
        Self {
            timeline,
            elapsed: Duration::ZERO,
        }
    }

    pub fn simple() -> Self {
        Self::new(&TIMELINE_SIMPLE)
    }

    pub fn continuous() -> Self {
        Self::new(&TIMELINE_CONTINUOUS)
    }

    fn total(&self) -> Duration {
        if self.timeline.continuous {
            WAVE_FOR
        } else {
            ARROW_FROM + ARROW_FOR
        }
    }

    /// How far the line has been drawn, in `[0, 1]`
    pub fn line_progress(&self) -> f64 {
        let (start, length) = if self.timeline.continuous {
            (Duration::ZERO, WAVE_FOR)
        } else {
            (ARROW_FROM, ARROW_FOR)
        };
        let drawn = self.elapsed.saturating_sub(start);
        (drawn.as_secs_f64() / length.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total()
    }

    fn track(&self, width: usize, theme: &Theme) -> Line<'static> {
        let mut cells = vec![' '; width];
        if width == 0 {
            return Line::default();
        }
        let progress = self.line_progress();
        let style;

        if self.timeline.continuous {
            let start = width / 10;
            let span = width * 8 / 10;
            let head = start + (span as f64 * progress) as usize;
            for (i, cell) in cells.iter_mut().enumerate().take(head).skip(start) {
                *cell = if i % 2 == 0 { '~' } else { '-' };
            }
            if let Some(cell) = cells.get_mut(head) {
                *cell = if theme.unicode { '◷' } else { 'o' };
            }
            style = theme.secondary();
        } else {
            let start = width / 4;
            if self.elapsed >= EVENT_AT {
                cells[start] = if theme.unicode { '✗' } else { 'X' };
            }
            let end = start + ((width - 1 - start) as f64 * progress) as usize;
            for cell in cells.iter_mut().take(end).skip(start + 1) {
                *cell = if theme.unicode { '─' } else { '-' };
            }
            if progress >= 1.0 {
                cells[width - 1] = '>';
            }
            style = theme.accent();
        }

        Line::from(Span::styled(cells.into_iter().collect::<String>(), style))
    }
}

impl Slide for TimelineSlide {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let lang = props.lang;
        let timeline = self.timeline;
        let block = slide_block(timeline.title, theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [focus, ends, track, label, sentence] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(2),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(t(lang, &timeline.focus), theme.muted()))
                .alignment(Alignment::Center),
            focus,
        );

        let [past, now] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(ends);
        frame.render_widget(
            Paragraph::new(Span::styled(t(lang, &PAST), theme.muted())),
            past,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(t(lang, &NOW), theme.title())).alignment(Alignment::Right),
            now,
        );

        frame.render_widget(Paragraph::new(self.track(track.width as usize, theme)), track);

        if self.is_finished() {
            frame.render_widget(
                Paragraph::new(Span::styled(format!("[ {} ]", t(lang, &timeline.label)), theme.title()))
                    .alignment(Alignment::Right),
                label,
            );
        }

        let lines = vec![
            Line::from(vec![
                Span::raw(format!("\"{}", timeline.sentence_before)),
                Span::styled(timeline.highlight, theme.accent()),
                Span::raw(format!("{}\"", timeline.sentence_after)),
            ]),
            Line::from(Span::styled(t(lang, &timeline.explanation).to_string(), theme.muted())),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            sentence,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Enter => {
                self.elapsed = Duration::ZERO;
                SlideResponse::Handled
            }
            _ => SlideResponse::Ignored,
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        if !self.is_finished() {
            self.elapsed += elapsed;
        }
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_TIMELINE)
    }
}
