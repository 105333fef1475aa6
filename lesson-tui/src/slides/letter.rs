//! "Letters of Note": type the present perfect forms into the gaps

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use liblessondeck::content::lesson::{LetterPart, Segment, LETTER_PART_1, LETTER_PART_2};
use liblessondeck::exercise::GapFill;
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;
use crate::ui::theme::Theme;

const SHOW_ANSWERS: Phrase = Phrase::new("Show Answers", "Показать ответы", "Javoblarni ko'rsatish");

pub struct LetterSlide {
    part: &'static LetterPart,
    gaps: GapFill,
    cursor: usize,
    editor: Option<TextArea<'static>>,
}

impl LetterSlide {
    pub fn new(part: &'static LetterPart) -> Self {
        Self {
            part,
            gaps: GapFill::new(part.gaps),
            cursor: 0,
            editor: None,
        }
    }

    pub fn part_one() -> Self {
        Self::new(&LETTER_PART_1)
    }

    pub fn part_two() -> Self {
        Self::new(&LETTER_PART_2)
    }

    pub fn gaps(&self) -> &GapFill {
        &self.gaps
    }

    fn open_editor(&mut self) {
        let current = self.gaps.input(self.cursor).to_string();
        let mut editor = TextArea::new(vec![current]);
        editor.set_cursor_line_style(Style::default());
        if let Some(hint) = self.gaps.hint(self.cursor) {
            editor.set_placeholder_text(format!("({})", hint));
        }
        editor.move_cursor(tui_textarea::CursorMove::End);
        self.editor = Some(editor);
    }

    fn commit_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            let text = editor.lines().join(" ");
            self.gaps.set_input(self.cursor, text);
        }
    }

    fn gap_span(&self, gap: usize, theme: &Theme) -> Span<'static> {
        let input = self.gaps.input(gap);
        let text = if input.is_empty() {
            format!("({})", self.gaps.hint(gap).unwrap_or_default())
        } else {
            input.to_string()
        };

        let result = self.gaps.result(gap);
        let style = match result {
            _ if gap == self.cursor => theme.cursor(),
            Some(_) => theme.verdict(result),
            None => theme.accent(),
        };
        let mark = theme.verdict_mark(result);
        Span::styled(format!("[{}: {}]{}", gap + 1, text, mark), style)
    }

    fn paragraph_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for paragraph in self.part.paragraphs {
            let spans: Vec<Span> = paragraph
                .iter()
                .map(|segment| match segment {
                    Segment::Text(text) => Span::raw(*text),
                    Segment::Gap(gap) => self.gap_span(*gap, theme),
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Slide for LetterSlide {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let title = format!("Letters of Note ({}/2)", self.part.number);
        let block = slide_block(&title, theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [letter, editor, status] = Layout::vertical([
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.paragraph_lines(theme)).wrap(Wrap { trim: true }),
            letter,
        );

        if let Some(textarea) = &self.editor {
            let mut textarea = textarea.clone();
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent())
                    .title(format!(" {} ", self.cursor + 1)),
            );
            frame.render_widget(&textarea, editor);
        }

        let status_line = if self.gaps.is_checked() {
            Line::from(Span::styled(
                format!(
                    "{}: {}/{}",
                    t(props.lang, &labels::SCORE),
                    self.gaps.score(),
                    self.gaps.len()
                ),
                theme.success(),
            ))
        } else {
            Line::from(Span::styled(
                format!(
                    "c: {} · a: {}",
                    t(props.lang, &labels::CHECK),
                    t(props.lang, &SHOW_ANSWERS)
                ),
                theme.muted(),
            ))
        };
        frame.render_widget(Paragraph::new(status_line), status);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        if let Some(editor) = self.editor.as_mut() {
            match key.code {
                KeyCode::Enter => self.commit_editor(),
                KeyCode::Esc => self.editor = None,
                _ => {
                    editor.input(key);
                }
            }
            return SlideResponse::Handled;
        }

        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.gaps.len().saturating_sub(1)),
            KeyCode::Enter => self.open_editor(),
            KeyCode::Char('c') => {
                self.gaps.check();
                tracing::debug!(
                    part = self.part.number,
                    score = self.gaps.score(),
                    "Letter gaps checked"
                );
            }
            KeyCode::Char('a') => self.gaps.fill_answers(),
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn captures_input(&self) -> bool {
        self.editor.is_some()
    }

    fn hint(&self) -> Option<Phrase> {
        if self.editor.is_some() {
            Some(labels::HINT_TYPING)
        } else {
            Some(labels::HINT_LETTER)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use liblessondeck::Language;

    fn type_text(slide: &mut LetterSlide, text: &str) {
        let props = props(Language::En);
        for c in text.chars() {
            slide.handle_key(key(KeyCode::Char(c)), &props);
        }
    }

    #[test]
    fn test_typing_into_a_gap() {
        let props = props(Language::En);
        let mut slide = LetterSlide::part_one();

        slide.handle_key(key(KeyCode::Enter), &props);
        assert!(slide.captures_input());

        type_text(&mut slide, "'s collected");
        slide.handle_key(key(KeyCode::Enter), &props);
        assert!(!slide.captures_input());
        assert_eq!(slide.gaps().input(0), "'s collected");

        slide.handle_key(key(KeyCode::Char('c')), &props);
        assert_eq!(slide.gaps().result(0), Some(true));
        assert_eq!(slide.gaps().result(1), Some(false));
    }

    #[test]
    fn test_escape_discards_edit() {
        let props = props(Language::En);
        let mut slide = LetterSlide::part_two();
        slide.handle_key(key(KeyCode::Down), &props);
        slide.handle_key(key(KeyCode::Enter), &props);
        type_text(&mut slide, "released");
        slide.handle_key(key(KeyCode::Esc), &props);

        assert!(!slide.captures_input());
        assert_eq!(slide.gaps().input(1), "");
    }

    #[test]
    fn test_show_answers_fills_every_gap() {
        let props = props(Language::En);
        let mut slide = LetterSlide::part_two();
        slide.handle_key(key(KeyCode::Char('a')), &props);
        assert_eq!(slide.gaps().score(), 3);
        assert_eq!(slide.gaps().input(0), "has got");
    }

    #[test]
    fn test_letters_typed_while_editing_are_not_commands() {
        let props = props(Language::En);
        let mut slide = LetterSlide::part_one();
        slide.handle_key(key(KeyCode::Enter), &props);
        type_text(&mut slide, "ca");
        slide.handle_key(key(KeyCode::Enter), &props);

        assert!(!slide.gaps().is_checked());
        assert_eq!(slide.gaps().input(0), "ca");
    }
}
