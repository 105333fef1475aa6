//! Vocabulary expansion over the shipped lesson

use liblessondeck::content::{unit1_vocab, validate_vocab};
use liblessondeck::registry::{lesson_outline, vocab_splice_point, Registry, SlideDescriptor};
use liblessondeck::SlideKind;

fn build() -> Registry<&'static str> {
    let outline = lesson_outline();
    let splice = vocab_splice_point(&outline);
    let authored = outline
        .into_iter()
        .map(|kind| SlideDescriptor::new(kind, "authored"))
        .collect();
    Registry::build(authored, splice, &unit1_vocab(), "teach", "quiz")
}

#[test]
fn test_length_is_static_plus_twice_vocab() {
    let registry = build();
    let vocab = unit1_vocab();
    assert_eq!(registry.len(), lesson_outline().len() + 2 * vocab.len());
}

#[test]
fn test_teaching_slide_precedes_quiz_for_same_entry() {
    let registry = build();
    let slides: Vec<_> = registry.iter().collect();

    for (i, slide) in slides.iter().enumerate() {
        if slide.kind == SlideKind::VocabTeaching {
            let quiz = slides[i + 1];
            assert_eq!(quiz.kind, SlideKind::VocabQuiz);
            assert_eq!(
                slide.data.as_ref().unwrap().vocab().id,
                quiz.data.as_ref().unwrap().vocab().id
            );
        }
    }
}

#[test]
fn test_entries_follow_table_order() {
    let registry = build();
    let vocab = unit1_vocab();

    let ids: Vec<_> = registry
        .iter()
        .filter(|slide| slide.kind == SlideKind::VocabTeaching)
        .map(|slide| slide.data.as_ref().unwrap().vocab().id.clone())
        .collect();
    let expected: Vec<_> = vocab.iter().map(|entry| entry.id.clone()).collect();

    assert_eq!(ids, expected);
}

#[test]
fn test_vocab_block_sits_between_section_intro_and_email() {
    let registry = build();
    let intro = registry.position_of(SlideKind::VocabSectionIntro).unwrap();
    let email = registry.position_of(SlideKind::EmailTask).unwrap();

    assert_eq!(registry.get(intro + 1).unwrap().kind, SlideKind::VocabTeaching);
    assert_eq!(email, intro + 1 + 2 * unit1_vocab().len());
    assert_eq!(email, registry.len() - 1);
}

#[test]
fn test_only_dynamic_slides_carry_data() {
    let registry = build();
    for slide in registry.iter() {
        assert_eq!(slide.data.is_some(), slide.kind.is_dynamic());
    }
}

#[test]
fn test_shipped_vocab_is_valid() {
    assert!(validate_vocab(&unit1_vocab()).is_ok());
}
