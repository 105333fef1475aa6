//! Subject versus object questions

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{QuestionForm, OBJECT_QUESTION, SUBJECT_QUESTION};
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new(
    "Subject vs Object Questions",
    "Вопросы к подлежащему vs дополнению",
    "Ega va To'ldiruvchi so'roqlari",
);

const FORMS: [QuestionForm; 2] = [SUBJECT_QUESTION, OBJECT_QUESTION];

#[derive(Debug, Clone, Default)]
pub struct SubjectObject {
    selected: usize,
}

impl SubjectObject {
    pub fn form(&self) -> &QuestionForm {
        &FORMS[self.selected]
    }
}

impl Slide for SubjectObject {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tabs, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

        frame.render_widget(
            Tabs::new(FORMS.iter().map(|form| form.label))
                .select(self.selected)
                .highlight_style(theme.cursor())
                .divider("|"),
            tabs,
        );

        let form = self.form();
        let lines = vec![
            Line::from(Span::styled(form.headline, theme.title())),
            Line::from(""),
            Line::from(t(props.lang, &form.explanation).to_string()),
            Line::from(""),
            Line::from(vec![
                Span::styled(theme.cross_mark(), theme.failure()),
                Span::raw(" "),
                Span::styled(form.wrong, theme.muted().add_modifier(Modifier::CROSSED_OUT)),
                Span::raw("    "),
                Span::styled(theme.tick_mark(), theme.success()),
                Span::raw(" "),
                Span::styled(form.right, theme.success()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.selected = 1 - self.selected,
            KeyCode::Char('s') => self.selected = 0,
            KeyCode::Char('o') => self.selected = 1,
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_GRAMMAR)
    }
}
