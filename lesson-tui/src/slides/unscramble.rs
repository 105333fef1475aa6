//! Build the question from shuffled words

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::UNSCRAMBLE_QUESTIONS;
use liblessondeck::exercise::{CheckState, Unscramble};
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new("Build the Question", "Составь вопрос", "Savol tuzing");
const INSTRUCTION: Phrase = Phrase::new(
    "Press a word's number to add it to the sentence.",
    "Нажимай номер слова, чтобы добавить его в предложение.",
    "Gapga qo'shish uchun so'z raqamini bosing.",
);
const ALL_DONE: Phrase = Phrase::new("All Done!", "Готово!", "Tayyor!");
const NEXT_QUESTION: Phrase = Phrase::new("n: next question", "n: следующий вопрос", "n: keyingi savol");

#[derive(Debug, Clone)]
pub struct QuestionUnscramble {
    exercise: Unscramble,
}

impl Default for QuestionUnscramble {
    fn default() -> Self {
        Self {
            exercise: Unscramble::new(UNSCRAMBLE_QUESTIONS),
        }
    }
}

impl QuestionUnscramble {
    pub fn exercise(&self) -> &Unscramble {
        &self.exercise
    }

    fn place_nth(&mut self, n: usize) -> bool {
        let id = match self.exercise.pool().get(n) {
            Some(tile) => tile.id,
            None => return false,
        };
        self.exercise.place(id)
    }

    fn status_line(&self, props: &SlideProps) -> Line<'static> {
        let theme = props.theme;
        let lang = props.lang;
        match self.exercise.state() {
            CheckState::Correct if self.exercise.is_finished() => Line::from(vec![
                Span::styled(format!("{} ", t(lang, &labels::CORRECT)), theme.success()),
                Span::styled(t(lang, &ALL_DONE).to_string(), theme.muted()),
            ]),
            CheckState::Correct => Line::from(vec![
                Span::styled(format!("{} ", t(lang, &labels::CORRECT)), theme.success()),
                Span::styled(t(lang, &NEXT_QUESTION).to_string(), theme.accent()),
            ]),
            CheckState::Incorrect => Line::from(Span::styled(
                format!("{} {} (r)", theme.cross_mark(), t(lang, &labels::TRY_AGAIN)),
                theme.failure(),
            )),
            CheckState::Pending => Line::from(Span::styled(
                format!(
                    "{}/{}",
                    self.exercise.question_number(),
                    self.exercise.question_count()
                ),
                theme.muted(),
            )),
        }
    }
}

impl Slide for QuestionUnscramble {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [instruction, sentence, pool, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(t(props.lang, &INSTRUCTION), theme.muted()))
                .alignment(Alignment::Center),
            instruction,
        );

        let placed_style = theme.verdict(match self.exercise.state() {
            CheckState::Pending => None,
            CheckState::Correct => Some(true),
            CheckState::Incorrect => Some(false),
        });
        let placed: Vec<Span> = self
            .exercise
            .placed()
            .iter()
            .flat_map(|tile| [Span::styled(tile.word.as_str(), placed_style), Span::raw(" ")])
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(placed))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.accent()),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            sentence,
        );

        let tiles: Vec<Span> = self
            .exercise
            .pool()
            .iter()
            .enumerate()
            .flat_map(|(i, tile)| {
                [
                    Span::styled(format!("{}:", i + 1), theme.muted()),
                    Span::raw(format!("{}   ", tile.word)),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(tiles))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            pool,
        );

        frame.render_widget(
            Paragraph::new(self.status_line(props)).alignment(Alignment::Center),
            status,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let n = c as usize - '1' as usize;
                if !self.place_nth(n) {
                    return SlideResponse::Ignored;
                }
            }
            KeyCode::Backspace => {
                self.exercise.undo_last();
            }
            KeyCode::Enter => {
                let state = self.exercise.check();
                tracing::debug!(
                    question = self.exercise.question_number(),
                    ?state,
                    "Unscramble checked"
                );
            }
            KeyCode::Char('a') => self.exercise.show_answer(),
            KeyCode::Char('r') => self.exercise.retry(),
            KeyCode::Char('n') => {
                self.exercise.next_question();
            }
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_UNSCRAMBLE)
    }
}
