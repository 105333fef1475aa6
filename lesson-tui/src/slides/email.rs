//! Closing task: write an exit email to the teacher

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use liblessondeck::content::lesson::EMAIL_PLACEHOLDER;
use liblessondeck::{t, Phrase};

use super::{heading, slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new("Mission Complete", "Миссия выполнена", "Vazifa bajarildi");
const SUBTITLE: Phrase = Phrase::new(
    "Write your exit email to the teacher.",
    "Напиши прощальное письмо учителю.",
    "O'qituvchiga yakuniy xat yozing.",
);
const TO: Phrase = Phrase::new("To: Teacher", "Кому: Учитель", "Kimga: O'qituvchi");
const SENT: Phrase = Phrase::new("Sent!", "Отправлено!", "Yuborildi!");

pub struct EmailTask {
    editor: TextArea<'static>,
    writing: bool,
    sent: bool,
}

impl Default for EmailTask {
    fn default() -> Self {
        let mut editor = TextArea::default();
        editor.set_placeholder_text(EMAIL_PLACEHOLDER);
        editor.set_cursor_line_style(Style::default());
        Self {
            editor,
            writing: false,
            sent: false,
        }
    }
}

impl EmailTask {
    pub fn text(&self) -> String {
        self.editor.lines().join("\n")
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    fn send(&mut self) {
        self.writing = false;
        self.sent = true;
        tracing::info!(chars = self.text().chars().count(), "Exit email sent");
    }
}

impl Slide for EmailTask {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header, body, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(vec![
                heading(&SUBTITLE, props.lang, theme),
                Line::from(""),
                Line::from(Span::styled(t(props.lang, &TO), theme.muted())),
            ]),
            header,
        );

        let (border, cursor) = if self.writing {
            (theme.accent(), Style::default().add_modifier(Modifier::REVERSED))
        } else {
            (theme.muted(), Style::default())
        };
        let mut editor = self.editor.clone();
        editor.set_block(Block::default().borders(Borders::ALL).border_style(border));
        editor.set_cursor_style(cursor);
        frame.render_widget(&editor, body);

        if self.sent {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("{} {}", theme.tick_mark(), t(props.lang, &SENT)),
                    theme.success(),
                ))
                .right_aligned(),
                status,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        if !self.writing {
            return match key.code {
                KeyCode::Enter => {
                    self.writing = true;
                    self.sent = false;
                    SlideResponse::Handled
                }
                _ => SlideResponse::Ignored,
            };
        }

        match key.code {
            KeyCode::Esc => self.writing = false,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.send(),
            _ => {
                self.editor.input(key);
            }
        }
        SlideResponse::Handled
    }

    fn captures_input(&self) -> bool {
        self.writing
    }

    fn hint(&self) -> Option<Phrase> {
        if self.writing {
            Some(labels::HINT_EMAIL_TYPING)
        } else {
            Some(labels::HINT_EMAIL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use liblessondeck::Language;

    #[test]
    fn test_write_and_send() {
        let props = props(Language::En);
        let mut slide = EmailTask::default();
        assert!(!slide.captures_input());

        slide.handle_key(key(KeyCode::Enter), &props);
        assert!(slide.captures_input());

        for c in "Thanks!".chars() {
            slide.handle_key(key(KeyCode::Char(c)), &props);
        }
        slide.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &props,
        );

        assert!(slide.is_sent());
        assert!(!slide.captures_input());
        assert_eq!(slide.text(), "Thanks!");
    }

    #[test]
    fn test_escape_keeps_draft() {
        let props = props(Language::En);
        let mut slide = EmailTask::default();
        slide.handle_key(key(KeyCode::Enter), &props);
        slide.handle_key(key(KeyCode::Char('q')), &props);
        slide.handle_key(key(KeyCode::Esc), &props);

        assert!(!slide.captures_input());
        assert!(!slide.is_sent());
        assert_eq!(slide.text(), "q");
    }
}
