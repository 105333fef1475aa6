//! Navigation properties over the full Unit 1 deck
//!
//! These tests verify:
//! - The index never leaves `[0, len - 1]` for arbitrary move sequences
//! - `next` then `previous` returns to the same slide away from the ends
//! - Language changes never move the index

use anyhow::Result;
use liblessondeck::content::unit1_vocab;
use liblessondeck::registry::{lesson_outline, vocab_splice_point, Registry, SlideDescriptor};
use liblessondeck::{Language, NavigationState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn deck_len() -> usize {
    let outline = lesson_outline();
    let splice = vocab_splice_point(&outline);
    let authored = outline
        .into_iter()
        .map(|kind| SlideDescriptor::new(kind, ()))
        .collect();
    Registry::build(authored, splice, &unit1_vocab(), (), ()).len()
}

#[test]
fn test_unit1_deck_has_eighty_slides() {
    assert_eq!(deck_len(), 80);
}

#[test]
fn test_index_stays_in_bounds_for_random_walks() -> Result<()> {
    let len = deck_len();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut nav = NavigationState::new(len, Language::En)?;
        for _ in 0..500 {
            match rng.gen_range(0..3) {
                0 => {
                    nav.next();
                }
                1 => {
                    nav.previous();
                }
                _ => nav.set_language(Language::ALL[rng.gen_range(0..3)]),
            }
            assert!(nav.current_index() < len);
        }
    }

    Ok(())
}

#[test]
fn test_next_then_previous_round_trips() -> Result<()> {
    let len = deck_len();

    for start in 0..len {
        let mut nav = NavigationState::new(len, Language::En)?.with_start(start);
        let moved = nav.next();
        nav.previous();

        if moved {
            assert_eq!(nav.current_index(), start);
        } else {
            // Only the last slide refuses to advance
            assert_eq!(start, len - 1);
            assert_eq!(nav.current_index(), len - 2);
        }
    }

    Ok(())
}

#[test]
fn test_arrow_sequence_then_language_switch() -> Result<()> {
    let mut nav = NavigationState::new(deck_len(), Language::En)?;

    nav.next();
    nav.next();
    nav.next();
    nav.previous();
    assert_eq!(nav.current_index(), 2);

    nav.set_language(Language::from_code_or_default("ru"));
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.language(), Language::Ru);

    Ok(())
}

#[test]
fn test_repeated_next_is_terminal_at_end() -> Result<()> {
    let len = deck_len();
    let mut nav = NavigationState::new(len, Language::En)?;

    for _ in 0..len * 2 {
        nav.next();
    }

    assert_eq!(nav.current_index(), len - 1);
    assert!(!nav.can_next());
    assert_eq!(nav.progress(), 1.0);

    Ok(())
}
