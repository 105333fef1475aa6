//! Match each verb with its dependent preposition

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use liblessondeck::content::lesson::PREPOSITION_PAIRS;
use liblessondeck::exercise::{MatchResult, Matching};
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new("Verbs + Prepositions", "Глаголы + Предлоги", "Fe'llar + Predloglar");
const VERBS: Phrase = Phrase::new("Verbs", "Глаголы", "Fe'llar");
const PREPOSITIONS: Phrase = Phrase::new("Prepositions", "Предлоги", "Predloglar");

#[derive(Debug, Clone)]
pub struct PrepositionMatch {
    matching: Matching,
    cursor: usize,
}

impl Default for PrepositionMatch {
    fn default() -> Self {
        let mut matching = Matching::new(PREPOSITION_PAIRS);
        matching.select_verb(0);
        Self { matching, cursor: 0 }
    }
}

impl PrepositionMatch {
    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    fn verb_count(&self) -> usize {
        self.matching.verbs().count()
    }

    /// Move the cursor and select the verb under it
    fn move_cursor(&mut self, up: bool) {
        let last = self.verb_count().saturating_sub(1);
        self.cursor = if up {
            self.cursor.saturating_sub(1)
        } else {
            (self.cursor + 1).min(last)
        };
        self.matching.select_verb(self.cursor);
    }

    fn verb_lines(&self, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        self.matching
            .verbs()
            .enumerate()
            .map(|(index, verb)| {
                if self.matching.is_solved(index) {
                    let prep = self.matching.answer(index).unwrap_or_default();
                    Line::from(vec![
                        Span::styled(format!("{} ", theme.tick_mark()), theme.success()),
                        Span::styled(format!("{} {}", verb, prep), theme.success()),
                    ])
                } else if self.matching.selected() == Some(index) {
                    Line::from(Span::styled(format!("> {}", verb), theme.cursor()))
                } else if index == self.cursor {
                    Line::from(Span::styled(format!("> {}", verb), theme.accent()))
                } else {
                    Line::from(format!("  {}", verb))
                }
            })
            .collect()
    }

    fn preposition_lines(&self, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        self.matching
            .prepositions()
            .iter()
            .enumerate()
            .map(|(index, prep)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", index + 1), theme.muted()),
                    Span::styled(prep.to_uppercase(), theme.accent()),
                ])
            })
            .collect()
    }
}

impl Slide for PrepositionMatch {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [columns, status] =
            Layout::vertical([Constraint::Min(6), Constraint::Length(1)]).areas(inner);
        let [verbs, preps] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(2)
                .areas(columns);

        frame.render_widget(
            Paragraph::new(self.verb_lines(props)).block(
                Block::default()
                    .title(t(props.lang, &VERBS))
                    .borders(Borders::ALL)
                    .border_style(theme.muted()),
            ),
            verbs,
        );
        frame.render_widget(
            Paragraph::new(self.preposition_lines(props)).block(
                Block::default()
                    .title(t(props.lang, &PREPOSITIONS))
                    .borders(Borders::ALL)
                    .border_style(theme.muted()),
            ),
            preps,
        );

        let line = if self.matching.show_error() {
            Line::from(Span::styled(
                format!("{} {}", theme.cross_mark(), t(props.lang, &labels::TRY_AGAIN)),
                theme.failure(),
            ))
        } else {
            Line::from(Span::styled(
                format!("{}/{}", self.matching.solved_count(), self.verb_count()),
                theme.muted(),
            ))
        };
        frame.render_widget(Paragraph::new(line).centered(), status);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Up => self.move_cursor(true),
            KeyCode::Down => self.move_cursor(false),
            KeyCode::Char(c @ '1'..='9') => {
                let prep = c as usize - '1' as usize;
                let result = self.matching.choose(prep);
                tracing::debug!(prep, ?result, "Preposition chosen");
                if result == MatchResult::Ignored {
                    return SlideResponse::Ignored;
                }
            }
            KeyCode::Char('r') => self.matching.reveal_all(),
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn tick(&mut self, elapsed: Duration) {
        self.matching.tick(elapsed);
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_MATCH)
    }
}
