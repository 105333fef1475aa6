//! Result or activity? Pick the sentence that matches the picture.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{ChoiceOption, RESULT_VS_ACTIVITY};
use liblessondeck::exercise::SingleChoice;
use liblessondeck::{t, Phrase};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const TITLE: Phrase = Phrase::new("Result vs Activity", "Результат или Действие", "Natija yoki Harakat");
const PROMPT: Phrase = Phrase::new(
    "Which sentence matches the image?",
    "Какое предложение подходит?",
    "Qaysi gap rasmga mos?",
);

#[derive(Debug, Clone)]
pub struct ResultVsActivity {
    options: &'static [ChoiceOption],
    choice: SingleChoice,
}

impl Default for ResultVsActivity {
    fn default() -> Self {
        Self {
            options: &RESULT_VS_ACTIVITY,
            choice: SingleChoice::new(RESULT_VS_ACTIVITY.iter().map(|o| o.correct)),
        }
    }
}

impl ResultVsActivity {
    pub fn choice(&self) -> &SingleChoice {
        &self.choice
    }
}

impl Slide for ResultVsActivity {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [prompt, cards] = Layout::vertical([Constraint::Length(2), Constraint::Min(6)]).areas(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(t(props.lang, &PROMPT), theme.muted())).centered(),
            prompt,
        );

        let count = self.options.len().max(1) as u32;
        let slots = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
            .spacing(2)
            .split(cards);

        for (index, (option, slot)) in self.options.iter().zip(slots.iter()).enumerate() {
            let selected = self.choice.selected() == Some(index);
            let result = selected.then_some(option.correct);

            let mut lines = vec![
                Line::from(Span::styled(format!("({})", option.picture), theme.muted())),
                Line::from(""),
                Line::from(Span::styled(format!("\"{}\"", option.sentence), theme.title())),
                Line::from(""),
            ];
            if selected {
                lines.push(Line::from(Span::styled(
                    format!("{} {}", theme.verdict_mark(result), option.verdict),
                    theme.verdict(result),
                )));
                lines.push(Line::from(option.explanation));
            }

            let border = if selected {
                theme.verdict(result)
            } else {
                theme.muted()
            };
            let widget = Paragraph::new(lines)
                .block(
                    Block::default()
                        .title(format!(" {} ", index + 1))
                        .borders(Borders::ALL)
                        .border_style(border),
                )
                .centered()
                .wrap(Wrap { trim: true });
            frame.render_widget(widget, *slot);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let option = c as usize - '1' as usize;
                if self.choice.select(option) {
                    tracing::debug!(option, correct = ?self.choice.is_correct(), "Choice made");
                    SlideResponse::Handled
                } else {
                    SlideResponse::Ignored
                }
            }
            _ => SlideResponse::Ignored,
        }
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_CHOICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use liblessondeck::Language;

    #[test]
    fn test_choice_can_change() {
        let props = props(Language::En);
        let mut slide = ResultVsActivity::default();

        slide.handle_key(key(KeyCode::Char('1')), &props);
        assert_eq!(slide.choice().is_correct(), Some(false));

        slide.handle_key(key(KeyCode::Char('2')), &props);
        assert_eq!(slide.choice().is_correct(), Some(true));

        assert_eq!(
            slide.handle_key(key(KeyCode::Char('3')), &props),
            SlideResponse::Ignored
        );
        assert_eq!(slide.choice().selected(), Some(1));
    }
}
