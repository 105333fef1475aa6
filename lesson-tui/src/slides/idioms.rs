//! Idiom flip cards

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{IdiomCard, IDIOM_CARDS};
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new("Idioms Cards", "Идиомы", "Iboralar");
const FLIP: Phrase = Phrase::new("Enter to flip", "Enter, чтобы перевернуть", "Aylantirish uchun Enter");

#[derive(Debug, Clone)]
pub struct IdiomCards {
    cards: &'static [IdiomCard],
    flipped: Vec<bool>,
    cursor: usize,
}

impl Default for IdiomCards {
    fn default() -> Self {
        Self::new(IDIOM_CARDS)
    }
}

impl IdiomCards {
    pub fn new(cards: &'static [IdiomCard]) -> Self {
        Self {
            cards,
            flipped: vec![false; cards.len()],
            cursor: 0,
        }
    }

    pub fn is_flipped(&self, card: usize) -> bool {
        self.flipped.get(card).copied().unwrap_or(false)
    }

    fn card_lines(&self, index: usize, card: &IdiomCard, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        if self.is_flipped(index) {
            vec![
                Line::from(Span::styled(card.term, theme.accent())),
                Line::from(""),
                Line::from(t(props.lang, &card.definition).to_string()),
                Line::from(""),
                Line::from(Span::styled(format!("\"{}\"", card.example), theme.muted())),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(card.term, theme.title())),
                Line::from(""),
                Line::from(Span::styled(t(props.lang, &FLIP).to_string(), theme.muted())),
            ]
        }
    }
}

impl Slide for IdiomCards {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let count = self.cards.len().max(1) as u32;
        let constraints = (0..count).map(|_| Constraint::Ratio(1, count));
        let slots = Layout::horizontal(constraints).spacing(1).split(inner);

        for (index, (card, slot)) in self.cards.iter().zip(slots.iter()).enumerate() {
            let border = if index == self.cursor {
                theme.accent()
            } else {
                theme.muted()
            };
            let widget = Paragraph::new(self.card_lines(index, card, props))
                .block(Block::default().borders(Borders::ALL).border_style(border))
                .centered()
                .wrap(Wrap { trim: true });
            frame.render_widget(widget, *slot);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.cards.len().saturating_sub(1)),
            KeyCode::Enter => {
                if let Some(flipped) = self.flipped.get_mut(self.cursor) {
                    *flipped = !*flipped;
                }
            }
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_IDIOMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use liblessondeck::Language;

    #[test]
    fn test_enter_flips_selected_card_only() {
        let props = props(Language::En);
        let mut slide = IdiomCards::default();

        slide.handle_key(key(KeyCode::Down), &props);
        slide.handle_key(key(KeyCode::Enter), &props);
        assert!(!slide.is_flipped(0));
        assert!(slide.is_flipped(1));

        slide.handle_key(key(KeyCode::Enter), &props);
        assert!(!slide.is_flipped(1));
    }

    #[test]
    fn test_cursor_stays_on_cards() {
        let props = props(Language::En);
        let mut slide = IdiomCards::default();
        for _ in 0..10 {
            slide.handle_key(key(KeyCode::Down), &props);
        }
        slide.handle_key(key(KeyCode::Enter), &props);
        assert!(slide.is_flipped(IDIOM_CARDS.len() - 1));
    }
}
