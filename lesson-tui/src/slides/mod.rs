//! Slides
//!
//! Every slide kind is an independent [`Slide`] implementation. The stage
//! mounts one instance at a time through the [`SlideFactory`] bound to the
//! registry descriptor, so exercise state lives exactly as long as the slide
//! is on screen.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
    Frame,
};

use liblessondeck::config::Config;
use liblessondeck::content::lesson::{
    COLLOCATION_TOPIC, IDIOM_TOPIC, PRESENT_PERFECT_CONTINUOUS_TOPIC, STATIONERY_TOPIC,
    SUBJECT_QUESTION_TOPIC,
};
use liblessondeck::registry::{lesson_outline, vocab_splice_point};
use liblessondeck::{
    t, Language, Phrase, Registry, SlideData, SlideDescriptor, SlideKind, SpeechRequest,
    VocabEntry,
};

use crate::ui::theme::Theme;

pub mod choice;
pub mod email;
pub mod grammar;
pub mod idioms;
pub mod intro;
pub mod letter;
pub mod mfp;
pub mod prepositions;
pub mod silence;
pub mod sorting;
pub mod timeline;
pub mod unscramble;
pub mod vocab;

/// What a slide is rendered with
#[derive(Debug, Clone, Copy)]
pub struct SlideProps<'a> {
    pub is_active: bool,
    pub lang: Language,
    pub data: Option<&'a SlideData>,
    pub theme: &'a Theme,
}

/// Result of routing a key to the mounted slide
#[derive(Debug, Clone, PartialEq)]
pub enum SlideResponse {
    /// The slide has no use for the key
    Ignored,
    /// The slide consumed the key
    Handled,
    /// The slide asks the deck to move on
    Advance,
    /// Read something aloud
    Speak(SpeechRequest),
}

/// A mounted slide
pub trait Slide {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps);

    fn handle_key(&mut self, key: KeyEvent, props: &SlideProps) -> SlideResponse;

    /// Advance slide-local timers
    fn tick(&mut self, _elapsed: Duration) {}

    /// Whether the slide is in text-entry mode and wants every key
    fn captures_input(&self) -> bool {
        false
    }

    /// Slide-local key hint shown under the slide
    fn hint(&self) -> Option<Phrase> {
        None
    }
}

/// Lesson settings a slide may need when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSettings {
    pub countdown: Duration,
    pub distractors: usize,
    pub shuffle_exercises: bool,
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SlideSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            countdown: Duration::from_secs(config.quiz.countdown_secs),
            distractors: config.quiz.distractors,
            shuffle_exercises: config.lesson.shuffle_exercises,
        }
    }
}

/// Everything a factory may draw on while mounting a slide
pub struct MountContext<'a> {
    pub data: Option<&'a SlideData>,
    pub vocab: &'a [Arc<VocabEntry>],
    pub rng: &'a mut StdRng,
    pub settings: &'a SlideSettings,
}

impl MountContext<'_> {
    pub fn vocab_entry(&self) -> Option<Arc<VocabEntry>> {
        match self.data {
            Some(SlideData::Vocab(entry)) => Some(Arc::clone(entry)),
            None => None,
        }
    }
}

/// Creates a fresh slide instance
pub type SlideFactory = fn(&mut MountContext<'_>) -> Box<dyn Slide>;

/// The factory bound to each slide kind
pub fn factory_for(kind: SlideKind) -> SlideFactory {
    use SlideKind::*;

    match kind {
        Intro => |_| Box::new(intro::Intro),
        VocabSectionIntro => |ctx| Box::new(intro::VocabSectionIntro::new(ctx.vocab.len())),
        SectionBreak => |_| Box::new(intro::SectionBreak),
        SilenceExperiment => |_| Box::new(silence::SilenceExperiment::default()),
        ConversationSort => |ctx| Box::new(sorting::ConversationSort::mount(ctx)),
        CommTypes => |ctx| Box::new(sorting::CommTypes::mount(ctx)),

        MfpIdiomIntro => |_| Box::new(mfp::MfpSlide::intro(mfp::IDIOMS, &IDIOM_TOPIC)),
        MfpIdiomMeaning => |_| Box::new(mfp::MfpSlide::meaning(mfp::IDIOMS, &IDIOM_TOPIC)),
        MfpIdiomExamples => |_| Box::new(mfp::MfpSlide::examples(mfp::IDIOMS, &IDIOM_TOPIC)),

        MfpSubjectQIntro => {
            |_| Box::new(mfp::MfpSlide::intro(mfp::QUESTIONS, &SUBJECT_QUESTION_TOPIC))
        }
        MfpSubjectQMeaning => {
            |_| Box::new(mfp::MfpSlide::meaning(mfp::QUESTIONS, &SUBJECT_QUESTION_TOPIC))
        }
        MfpSubjectQExamples => {
            |_| Box::new(mfp::MfpSlide::examples(mfp::QUESTIONS, &SUBJECT_QUESTION_TOPIC))
        }

        MfpVocabStationeryIntro => {
            |_| Box::new(mfp::MfpSlide::intro(mfp::STATIONERY, &STATIONERY_TOPIC))
        }
        MfpVocabStationeryMeaning => {
            |_| Box::new(mfp::MfpSlide::meaning(mfp::STATIONERY, &STATIONERY_TOPIC))
        }
        MfpVocabStationeryExamples => {
            |_| Box::new(mfp::MfpSlide::examples(mfp::STATIONERY, &STATIONERY_TOPIC))
        }

        MfpGrammarPpcIntro => |_| {
            Box::new(mfp::MfpSlide::intro(
                mfp::PERFECT_CONTINUOUS,
                &PRESENT_PERFECT_CONTINUOUS_TOPIC,
            ))
        },
        MfpGrammarPpcMeaning => |_| {
            Box::new(mfp::MfpSlide::meaning(
                mfp::PERFECT_CONTINUOUS,
                &PRESENT_PERFECT_CONTINUOUS_TOPIC,
            ))
        },
        MfpGrammarPpcExamples => |_| {
            Box::new(mfp::MfpSlide::examples(
                mfp::PERFECT_CONTINUOUS,
                &PRESENT_PERFECT_CONTINUOUS_TOPIC,
            ))
        },

        MfpCollocationIntro => {
            |_| Box::new(mfp::MfpSlide::intro(mfp::COLLOCATIONS, &COLLOCATION_TOPIC))
        }
        MfpCollocationMeaning => {
            |_| Box::new(mfp::MfpSlide::meaning(mfp::COLLOCATIONS, &COLLOCATION_TOPIC))
        }
        MfpCollocationExamples => {
            |_| Box::new(mfp::MfpSlide::examples(mfp::COLLOCATIONS, &COLLOCATION_TOPIC))
        }

        Idioms => |_| Box::new(idioms::IdiomCards::default()),
        GrammarSubjectObject => |_| Box::new(grammar::SubjectObject::default()),
        QuestionUnscramble => |_| Box::new(unscramble::QuestionUnscramble::default()),
        TimelineSimple => |_| Box::new(timeline::TimelineSlide::simple()),
        TimelineContinuous => |_| Box::new(timeline::TimelineSlide::continuous()),
        QuizResultActivity => |_| Box::new(choice::ResultVsActivity::default()),
        LetterGrammar1 => |_| Box::new(letter::LetterSlide::part_one()),
        LetterGrammar2 => |_| Box::new(letter::LetterSlide::part_two()),
        Prepositions => |_| Box::new(prepositions::PrepositionMatch::default()),
        EmailTask => |_| Box::new(email::EmailTask::default()),

        VocabTeaching => |ctx| Box::new(vocab::VocabTeaching::mount(ctx)),
        VocabQuiz => |ctx| Box::new(vocab::VocabQuizSlide::mount(ctx)),
    }
}

/// The Unit 1 deck with every kind bound to its factory
pub fn build_registry(vocab: &[Arc<VocabEntry>]) -> Registry<SlideFactory> {
    let outline = lesson_outline();
    let splice_at = vocab_splice_point(&outline);
    let authored = outline
        .into_iter()
        .map(|kind| SlideDescriptor::new(kind, factory_for(kind)))
        .collect();

    Registry::build(
        authored,
        splice_at,
        vocab,
        factory_for(SlideKind::VocabTeaching),
        factory_for(SlideKind::VocabQuiz),
    )
}

/// Bordered frame every slide draws inside
pub(crate) fn slide_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.muted())
        .padding(Padding::horizontal(1))
}

/// A localized heading line
pub(crate) fn heading<'a>(phrase: &Phrase, lang: Language, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(t(lang, phrase).to_string(), theme.title()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use liblessondeck::content::unit1_vocab;

    #[test]
    fn test_registry_binds_every_kind() {
        let vocab = unit1_vocab();
        let registry = build_registry(&vocab);
        assert_eq!(registry.len(), lesson_outline().len() + vocab.len() * 2);
        assert_eq!(registry.get(0).map(|d| d.kind), Some(SlideKind::Intro));
    }

    #[test]
    fn test_every_factory_mounts() {
        use rand::SeedableRng;

        let vocab = unit1_vocab();
        let registry = build_registry(&vocab);
        let settings = SlideSettings::default();
        let mut rng = StdRng::seed_from_u64(7);

        for descriptor in registry.iter() {
            let mut ctx = MountContext {
                data: descriptor.data.as_ref(),
                vocab: &vocab,
                rng: &mut rng,
                settings: &settings,
            };
            let slide = (descriptor.render)(&mut ctx);
            assert!(!slide.captures_input(), "{} starts in text mode", descriptor.kind);
        }
    }
}
