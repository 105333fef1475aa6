//! Vocabulary teaching card and its follow-up quiz
//!
//! Both slides are mounted from a vocabulary descriptor. The quiz is
//! generated once at mount time, so going back and forward again gives
//! the learner a fresh question.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use liblessondeck::speech::VOCAB_RATE;
use liblessondeck::timer::Countdown;
use liblessondeck::{t, Phrase, SpeechRequest, VocabEntry, VocabQuiz};

use super::{slide_block, MountContext, Slide, SlideProps, SlideResponse};
use crate::ui::labels;

const VOCABULARY: Phrase = Phrase::new("Vocabulary", "Словарь", "Lug'at");
const EXAMPLES: Phrase = Phrase::new("Examples", "Примеры", "Misollar");
const QUIZ_TITLE: Phrase = Phrase::new("Complete the sentence", "Закончи предложение", "Gapni to'ldiring");
const ANSWER_WAS: Phrase = Phrase::new("Answer:", "Ответ:", "Javob:");

/// Word, definition and examples for one vocabulary entry
#[derive(Debug, Clone)]
pub struct VocabTeaching {
    entry: Option<Arc<VocabEntry>>,
}

impl VocabTeaching {
    pub fn new(entry: Arc<VocabEntry>) -> Self {
        Self { entry: Some(entry) }
    }

    pub fn mount(ctx: &mut MountContext<'_>) -> Self {
        let entry = ctx.vocab_entry();
        debug_assert!(entry.is_some(), "vocabulary slide mounted without an entry");
        Self { entry }
    }

    fn lines(entry: &VocabEntry, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(entry.word.clone(), theme.title()),
                Span::raw("  "),
                Span::styled(format!("({})", entry.part_of_speech), theme.muted()),
            ]),
            Line::from(vec![
                Span::styled(entry.pronunciation.clone(), theme.accent()),
                Span::raw(" "),
                Span::raw(theme.speaker_mark()),
            ]),
            Line::from(""),
            Line::from(t(props.lang, &entry.definitions).to_string()),
            Line::from(""),
        ];

        if !entry.examples.is_empty() {
            lines.push(Line::from(Span::styled(
                t(props.lang, &EXAMPLES).to_string(),
                theme.secondary(),
            )));
            lines.extend(
                entry
                    .examples
                    .iter()
                    .map(|example| Line::from(format!("• {}", example))),
            );
        }
        lines
    }
}

impl Slide for VocabTeaching {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let block = slide_block(t(props.lang, &VOCABULARY), props.theme);
        let lines = match &self.entry {
            Some(entry) => Self::lines(entry, props),
            None => Vec::new(),
        };
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        match key.code {
            KeyCode::Char('s') => match &self.entry {
                Some(entry) => SlideResponse::Speak(SpeechRequest::new(entry.word.as_str(), VOCAB_RATE)),
                None => SlideResponse::Ignored,
            },
            KeyCode::Enter => SlideResponse::Advance,
            _ => SlideResponse::Ignored,
        }
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_LISTEN)
    }
}

/// Four-option fill-in-the-blank quiz for one entry
#[derive(Debug, Clone)]
pub struct VocabQuizSlide {
    quiz: Option<VocabQuiz>,
    countdown: Countdown,
}

impl VocabQuizSlide {
    pub fn mount(ctx: &mut MountContext<'_>) -> Self {
        let entry = ctx.vocab_entry();
        debug_assert!(entry.is_some(), "quiz slide mounted without an entry");

        let quiz = entry.map(|entry| {
            VocabQuiz::generate(&entry, ctx.vocab, ctx.settings.distractors, &mut *ctx.rng)
        });
        Self {
            quiz,
            countdown: Countdown::new(ctx.settings.countdown),
        }
    }

    pub fn quiz(&self) -> Option<&VocabQuiz> {
        self.quiz.as_ref()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    fn option_lines(quiz: &VocabQuiz, props: &SlideProps) -> Vec<Line<'static>> {
        let theme = props.theme;
        let outcome = quiz.outcome();

        quiz.options()
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let (style, mark) = match outcome {
                    Some(_) if index == quiz.correct_index() => (theme.success(), theme.tick_mark()),
                    Some(o) if o.selected == index => (theme.failure(), theme.cross_mark()),
                    Some(_) => (theme.muted(), ""),
                    None => (theme.accent(), ""),
                };
                Line::from(vec![
                    Span::styled(format!("{}. ", index + 1), theme.muted()),
                    Span::styled(option.clone(), style),
                    Span::raw(format!(" {}", mark)),
                ])
            })
            .collect()
    }

    fn verdict_line(quiz: &VocabQuiz, props: &SlideProps) -> Line<'static> {
        let theme = props.theme;
        match quiz.outcome() {
            Some(outcome) if outcome.is_correct => Line::from(Span::styled(
                t(props.lang, &labels::CORRECT).to_string(),
                theme.success(),
            )),
            Some(_) => {
                let answer = quiz
                    .options()
                    .get(quiz.correct_index())
                    .cloned()
                    .unwrap_or_default();
                Line::from(vec![
                    Span::styled(format!("{} ", t(props.lang, &ANSWER_WAS)), theme.failure()),
                    Span::styled(answer, theme.success()),
                ])
            }
            None => Line::default(),
        }
    }
}

impl Slide for VocabQuizSlide {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let block = slide_block(t(props.lang, &QUIZ_TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(quiz) = &self.quiz else {
            return;
        };

        let [timer, prompt, options, verdict] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(inner);

        let bar_width = (timer.width as usize).saturating_sub(6);
        let countdown_style = if self.countdown.is_expired() {
            theme.failure()
        } else {
            theme.accent()
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(theme.bar(self.countdown.fraction_left(), bar_width), countdown_style),
                Span::raw(format!(" {:>2}s", self.countdown.remaining_secs())),
            ])),
            timer,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(format!("\"{}\"", quiz.prompt()), theme.title()))
                .centered()
                .wrap(Wrap { trim: true }),
            prompt,
        );
        frame.render_widget(Paragraph::new(Self::option_lines(quiz, props)), options);
        frame.render_widget(
            Paragraph::new(Self::verdict_line(quiz, props)).centered(),
            verdict,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        let Some(quiz) = self.quiz.as_mut() else {
            return SlideResponse::Ignored;
        };

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match quiz.select(index) {
                    Some(outcome) => {
                        self.countdown.stop();
                        tracing::info!(
                            selected = outcome.selected,
                            correct = outcome.is_correct,
                            "Quiz answered"
                        );
                        SlideResponse::Handled
                    }
                    None => SlideResponse::Ignored,
                }
            }
            KeyCode::Enter if quiz.is_answered() => SlideResponse::Advance,
            _ => SlideResponse::Ignored,
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        self.countdown.tick(elapsed);
    }

    fn hint(&self) -> Option<Phrase> {
        match &self.quiz {
            Some(quiz) if quiz.is_answered() => Some(labels::HINT_CONTINUE),
            _ => Some(labels::HINT_QUIZ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::testing::{key, props};
    use crate::slides::SlideSettings;
    use liblessondeck::content::unit1_vocab;
    use liblessondeck::quiz::MAX_DISTRACTORS;
    use liblessondeck::{Language, SlideData};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mount_quiz(seed: u64) -> VocabQuizSlide {
        mount_quiz_with(seed, SlideSettings::default())
    }

    fn mount_quiz_with(seed: u64, settings: SlideSettings) -> VocabQuizSlide {
        let vocab = unit1_vocab();
        let data = SlideData::Vocab(Arc::clone(&vocab[0]));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = MountContext {
            data: Some(&data),
            vocab: &vocab,
            rng: &mut rng,
            settings: &settings,
        };
        VocabQuizSlide::mount(&mut ctx)
    }

    #[test]
    fn test_teaching_speaks_word_slowly() {
        let vocab = unit1_vocab();
        let mut slide = VocabTeaching::new(Arc::clone(&vocab[0]));
        let response = slide.handle_key(key(KeyCode::Char('s')), &props(Language::Uz));
        assert_eq!(
            response,
            SlideResponse::Speak(SpeechRequest::new(vocab[0].word.as_str(), VOCAB_RATE))
        );
    }

    #[test]
    fn test_quiz_has_four_options() {
        let slide = mount_quiz(1);
        let quiz = slide.quiz().expect("quiz generated");
        assert_eq!(quiz.options().len(), 4);
        assert!(slide.countdown().is_running());
    }

    #[test]
    fn test_first_answer_is_final() {
        let props = props(Language::En);
        let mut slide = mount_quiz(2);
        let correct = slide.quiz().map(|q| q.correct_index()).expect("quiz generated");
        let wrong = (correct + 1) % 4;

        assert_eq!(slide.handle_key(key(KeyCode::Enter), &props), SlideResponse::Ignored);

        let digit = char::from_digit(wrong as u32 + 1, 10).expect("single digit");
        assert_eq!(slide.handle_key(key(KeyCode::Char(digit)), &props), SlideResponse::Handled);

        let digit = char::from_digit(correct as u32 + 1, 10).expect("single digit");
        assert_eq!(slide.handle_key(key(KeyCode::Char(digit)), &props), SlideResponse::Ignored);

        let outcome = slide.quiz().and_then(|q| q.outcome()).expect("answered");
        assert!(!outcome.is_correct);
        assert!(!slide.countdown().is_running());
        assert_eq!(slide.handle_key(key(KeyCode::Enter), &props), SlideResponse::Advance);
    }

    #[test]
    fn test_countdown_is_cosmetic() {
        let props = props(Language::En);
        let mut slide = mount_quiz(3);
        slide.tick(Duration::from_secs(60));
        assert!(slide.countdown().is_expired());

        assert_eq!(slide.handle_key(key(KeyCode::Char('1')), &props), SlideResponse::Handled);
    }

    #[test]
    fn test_largest_quiz_is_answerable_by_digit() {
        let settings = SlideSettings {
            distractors: MAX_DISTRACTORS,
            ..SlideSettings::default()
        };
        let props = props(Language::En);

        for seed in 0..50 {
            let mut slide = mount_quiz_with(seed, settings);
            let quiz = slide.quiz().expect("quiz generated");
            assert_eq!(quiz.options().len(), MAX_DISTRACTORS + 1);

            let digit = char::from_digit(quiz.correct_index() as u32 + 1, 10)
                .expect("correct option has a digit key");
            assert_eq!(slide.handle_key(key(KeyCode::Char(digit)), &props), SlideResponse::Handled);
            assert!(slide.quiz().and_then(|q| q.outcome()).is_some_and(|o| o.is_correct));
        }
    }
}
