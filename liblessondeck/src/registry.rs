//! Slide registry and dynamic vocabulary expansion
//!
//! The registry is the ordered list of slide descriptors the deck walks
//! through. It is built once at startup and never mutated. The renderer type
//! is a parameter so the library stays independent of any terminal stack;
//! the TUI binds each descriptor to a slide factory.

use std::sync::Arc;

use tracing::debug;

use crate::types::{SlideKind, VocabEntry};

/// Payload carried by dynamically generated slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideData {
    Vocab(Arc<VocabEntry>),
}

impl SlideData {
    pub fn vocab(&self) -> &VocabEntry {
        match self {
            SlideData::Vocab(entry) => entry,
        }
    }
}

/// One registry entry: a kind tag, the bound renderer and optional data
#[derive(Debug, Clone)]
pub struct SlideDescriptor<R> {
    pub kind: SlideKind,
    pub render: R,
    pub data: Option<SlideData>,
}

impl<R> SlideDescriptor<R> {
    pub fn new(kind: SlideKind, render: R) -> Self {
        Self {
            kind,
            render,
            data: None,
        }
    }

    pub fn with_data(kind: SlideKind, render: R, data: SlideData) -> Self {
        Self {
            kind,
            render,
            data: Some(data),
        }
    }
}

/// Immutable ordered list of slide descriptors
#[derive(Debug, Clone)]
pub struct Registry<R> {
    slides: Vec<SlideDescriptor<R>>,
}

impl<R: Clone> Registry<R> {
    /// Build the deck: the authored slides with a teaching slide and a quiz
    /// slide per vocabulary entry spliced in at `splice_at`.
    ///
    /// Entries contribute `(VocabTeaching, entry)` then `(VocabQuiz, entry)`
    /// in table order. A splice point past the end is clamped to the end.
    pub fn build(
        authored: Vec<SlideDescriptor<R>>,
        splice_at: usize,
        vocab: &[Arc<VocabEntry>],
        teach: R,
        quiz: R,
    ) -> Self {
        let splice_at = splice_at.min(authored.len());
        let authored_len = authored.len();
        let mut slides = Vec::with_capacity(authored_len + vocab.len() * 2);
        let mut authored = authored.into_iter();

        slides.extend(authored.by_ref().take(splice_at));
        for entry in vocab {
            slides.push(SlideDescriptor::with_data(
                SlideKind::VocabTeaching,
                teach.clone(),
                SlideData::Vocab(Arc::clone(entry)),
            ));
            slides.push(SlideDescriptor::with_data(
                SlideKind::VocabQuiz,
                quiz.clone(),
                SlideData::Vocab(Arc::clone(entry)),
            ));
        }
        slides.extend(authored);

        debug!(
            authored = authored_len,
            vocab = vocab.len(),
            len = slides.len(),
            splice_at,
            "Built slide registry"
        );

        Self { slides }
    }
}

impl<R> Registry<R> {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor<R>> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor<R>> {
        self.slides.iter()
    }

    /// Index of the first slide of the given kind
    pub fn position_of(&self, kind: SlideKind) -> Option<usize> {
        self.slides.iter().position(|slide| slide.kind == kind)
    }
}

/// The authored slides of Unit 1, in lesson order
pub fn lesson_outline() -> Vec<SlideKind> {
    use SlideKind::*;

    vec![
        Intro,
        SilenceExperiment,
        ConversationSort,
        MfpIdiomIntro,
        MfpIdiomMeaning,
        MfpIdiomExamples,
        Idioms,
        MfpSubjectQIntro,
        MfpSubjectQMeaning,
        MfpSubjectQExamples,
        GrammarSubjectObject,
        QuestionUnscramble,
        CommTypes,
        MfpVocabStationeryIntro,
        MfpVocabStationeryMeaning,
        MfpVocabStationeryExamples,
        LetterGrammar1,
        LetterGrammar2,
        MfpGrammarPpcIntro,
        TimelineSimple,
        TimelineContinuous,
        MfpGrammarPpcMeaning,
        MfpGrammarPpcExamples,
        QuizResultActivity,
        MfpCollocationIntro,
        MfpCollocationMeaning,
        MfpCollocationExamples,
        Prepositions,
        VocabSectionIntro,
        EmailTask,
    ]
}

/// Index just after the vocabulary section intro, or the end of the outline
/// when it has none
pub fn vocab_splice_point(outline: &[SlideKind]) -> usize {
    outline
        .iter()
        .position(|kind| *kind == SlideKind::VocabSectionIntro)
        .map(|i| i + 1)
        .unwrap_or(outline.len())
}
