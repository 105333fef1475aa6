//! Meaning, Form, Pronunciation
//!
//! Each MFP topic is taught over three slides: the target with its
//! pronunciation, the meaning in all three languages with the form, and
//! examples with a common error.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::MfpTopic;
use liblessondeck::speech::TARGET_RATE;
use liblessondeck::{t, Language, Phrase, SpeechRequest};

use super::{slide_block, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

pub const IDIOMS: Phrase = Phrase::new("Idioms", "Идиомы", "Iboralar");
pub const QUESTIONS: Phrase = Phrase::new(
    "Subject Questions",
    "Вопросы к подлежащему",
    "Ega so'roqlari",
);
pub const STATIONERY: Phrase = Phrase::new("Vocabulary", "Словарь", "Lug'at");
pub const PERFECT_CONTINUOUS: Phrase = Phrase::new(
    "Present Perfect Continuous",
    "Present Perfect Continuous",
    "Present Perfect Continuous",
);
pub const COLLOCATIONS: Phrase = Phrase::new("Collocations", "Словосочетания", "Birikmalar");

const TARGET_LANGUAGE: Phrase =
    Phrase::new("Target Language", "Целевой Язык", "O'rganilayotgan Til");
const MEANING: Phrase = Phrase::new("Meaning", "Значение", "Ma'nosi");
const FORM: Phrase = Phrase::new("Form / Structure", "Форма / Структура", "Shakl / Tuzilma");
const EXAMPLES: Phrase = Phrase::new(
    "Examples & Common Errors",
    "Примеры и Ошибки",
    "Misollar va Xatolar",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MfpPhase {
    Intro,
    Meaning,
    Examples,
}

#[derive(Debug, Clone, Copy)]
pub struct MfpSlide {
    title: Phrase,
    topic: &'static MfpTopic,
    phase: MfpPhase,
}

impl MfpSlide {
    pub fn new(title: Phrase, topic: &'static MfpTopic, phase: MfpPhase) -> Self {
        Self { title, topic, phase }
    }

    pub fn intro(title: Phrase, topic: &'static MfpTopic) -> Self {
        Self::new(title, topic, MfpPhase::Intro)
    }

    pub fn meaning(title: Phrase, topic: &'static MfpTopic) -> Self {
        Self::new(title, topic, MfpPhase::Meaning)
    }

    pub fn examples(title: Phrase, topic: &'static MfpTopic) -> Self {
        Self::new(title, topic, MfpPhase::Examples)
    }

    pub fn phase(&self) -> MfpPhase {
        self.phase
    }

    fn intro_lines(&self, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        vec![
            Line::from(Span::styled(
                t(props.lang, &TARGET_LANGUAGE).to_uppercase(),
                theme.muted(),
            )),
            Line::from(""),
            Line::from(Span::styled(self.topic.target, theme.title())),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("/{}/", self.topic.pronunciation), theme.accent()),
                Span::raw(" "),
                Span::raw(theme.speaker_mark()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                t(props.lang, &labels::TAP_TO_LISTEN).to_string(),
                theme.muted(),
            )),
        ]
    }

    fn meaning_lines(&self, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                t(props.lang, &MEANING).to_uppercase(),
                theme.accent(),
            )),
            Line::from(""),
        ];

        // Every language is shown so the class can compare
        for lang in Language::ALL {
            lines.push(Line::from(Span::styled(
                lang.name().to_uppercase(),
                theme.muted(),
            )));
            lines.push(Line::from(t(lang, &self.topic.meaning).to_string()));
            lines.push(Line::from(""));
        }

        if let Some(form) = self.topic.form {
            lines.push(Line::from(Span::styled(
                t(props.lang, &FORM).to_uppercase(),
                theme.muted(),
            )));
            lines.push(Line::from(Span::styled(form, theme.accent())));
        }
        lines
    }

    fn example_lines(&self, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        let mut lines = vec![
            Line::from(Span::styled(t(props.lang, &EXAMPLES).to_string(), theme.title())),
            Line::from(""),
        ];

        for example in self.topic.examples {
            let line = if example.is_correct {
                Line::from(vec![
                    Span::styled(theme.tick_mark(), theme.success()),
                    Span::raw(" "),
                    Span::raw(example.text),
                ])
            } else {
                Line::from(vec![
                    Span::styled(theme.cross_mark(), theme.failure()),
                    Span::raw(" "),
                    Span::styled(
                        example.text,
                        theme.muted().add_modifier(Modifier::CROSSED_OUT),
                    ),
                ])
            };
            lines.push(line);

            if let Some(note) = example.note {
                let style = if example.is_correct {
                    theme.success()
                } else {
                    theme.failure()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {} {}", theme.warning_mark(), note),
                    style,
                )));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Slide for MfpSlide {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let (lines, alignment) = match self.phase {
            MfpPhase::Intro => (self.intro_lines(props), Alignment::Center),
            MfpPhase::Meaning => (self.meaning_lines(props), Alignment::Left),
            MfpPhase::Examples => (self.example_lines(props), Alignment::Left),
        };

        let widget = Paragraph::new(lines)
            .block(slide_block(t(props.lang, &self.title), props.theme))
            .alignment(alignment)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, area);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match (self.phase, key.code) {
            (MfpPhase::Intro, KeyCode::Char('s')) => {
                SlideResponse::Speak(SpeechRequest::new(self.topic.target, TARGET_RATE))
            }
            (_, KeyCode::Enter) => SlideResponse::Advance,
            _ => SlideResponse::Ignored,
        }
    }

    fn hint(&self) -> Option<Phrase> {
        match self.phase {
            MfpPhase::Intro => Some(labels::HINT_LISTEN),
            _ => Some(labels::HINT_CONTINUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use liblessondeck::content::lesson::IDIOM_TOPIC;

    #[test]
    fn test_intro_speaks_target_at_target_rate() {
        let mut slide = MfpSlide::intro(IDIOMS, &IDIOM_TOPIC);
        let response = slide.handle_key(key(KeyCode::Char('s')), &props(Language::Ru));
        assert_eq!(
            response,
            SlideResponse::Speak(SpeechRequest::new("Put your foot in it", 0.9))
        );
    }

    #[test]
    fn test_only_intro_speaks() {
        let mut slide = MfpSlide::examples(IDIOMS, &IDIOM_TOPIC);
        let props = props(Language::En);
        assert_eq!(slide.handle_key(key(KeyCode::Char('s')), &props), SlideResponse::Ignored);
        assert_eq!(slide.handle_key(key(KeyCode::Enter), &props), SlideResponse::Advance);
    }
}
