//! Title slides

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{UNIT_SUMMARY, UNIT_TITLE};
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const LEVEL: &str = "B2";

const WORDLIST: Phrase = Phrase::new("Unit 1 Wordlist", "Словарь Раздела 1", "1-Bo'lim So'zlari");
const WORDS: Phrase = Phrase::new("words", "слов", "so'z");
const HINT_START_LEARNING: Phrase = Phrase::new(
    "Enter: start learning",
    "Enter: начать учить",
    "Enter: o'rganishni boshlash",
);
const NEXT_SECTION: Phrase = Phrase::new("Next section", "Следующий раздел", "Keyingi bo'lim");

fn continue_on_enter(key: KeyEvent) -> SlideResponse {
    match key.code {
        KeyCode::Enter => SlideResponse::Advance,
        _ => SlideResponse::Ignored,
    }
}

fn centered(lines: Vec<Line<'_>>, title: &str, frame: &mut Frame, area: Rect, props: &SlideProps) {
    let top_pad = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let mut padded = vec![Line::from(""); top_pad as usize];
    padded.extend(lines);

    let widget = Paragraph::new(padded)
        .block(slide_block(title, props.theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

/// Lesson title
pub struct Intro;

impl Slide for Intro {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let lines = vec![
            Line::from(Span::styled(LEVEL, theme.accent())),
            Line::from(""),
            Line::from(Span::styled(UNIT_TITLE, theme.title())),
            Line::from(""),
            Line::from(t(props.lang, &UNIT_SUMMARY).to_string()),
        ];
        centered(lines, UNIT_TITLE, frame, area, props);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        continue_on_enter(key)
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_START)
    }
}

/// Opens the generated vocabulary block
pub struct VocabSectionIntro {
    word_count: usize,
}

impl VocabSectionIntro {
    pub fn new(word_count: usize) -> Self {
        Self { word_count }
    }
}

impl Slide for VocabSectionIntro {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let lines = vec![
            Line::from(Span::styled("VOCABULARY", theme.title())),
            Line::from(""),
            Line::from(Span::styled(t(props.lang, &WORDLIST).to_string(), theme.accent())),
            Line::from(format!("{} {}", self.word_count, t(props.lang, &WORDS))),
        ];
        centered(lines, "Vocabulary", frame, area, props);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        continue_on_enter(key)
    }

    fn hint(&self) -> Option<Phrase> {
        Some(HINT_START_LEARNING)
    }
}

/// Divider between lesson sections
pub struct SectionBreak;

impl Slide for SectionBreak {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let lines = vec![Line::from(Span::styled(
            t(props.lang, &NEXT_SECTION).to_string(),
            props.theme.title(),
        ))];
        centered(lines, UNIT_TITLE, frame, area, props);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        continue_on_enter(key)
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_CONTINUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use crossterm::event::KeyModifiers;
    use liblessondeck::Language;

    #[test]
    fn test_enter_advances() {
        let theme = Theme::default();
        let props = SlideProps {
            is_active: true,
            lang: Language::En,
            data: None,
            theme: &theme,
        };
        let mut slide = Intro;
        assert_eq!(
            slide.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &props),
            SlideResponse::Advance
        );
        assert_eq!(
            slide.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &props),
            SlideResponse::Ignored
        );
    }
}
