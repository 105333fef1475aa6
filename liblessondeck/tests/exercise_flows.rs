//! Complete exercise workflows over the shipped lesson content
//!
//! Each test plays one exercise the way a learner would, from a fresh
//! mount to a finished state.

use liblessondeck::content::lesson::{
    Channel, ConversationRule, CHANNEL_ITEMS, CONVERSATION_ITEMS, LETTER_PART_1, LETTER_PART_2,
    PREPOSITION_PAIRS, UNSCRAMBLE_QUESTIONS,
};
use liblessondeck::exercise::{
    CheckState, Classifier, GapFill, MatchResult, Matching, Unscramble,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_conversation_sort_full_marks() {
    let mut board = Classifier::new(CONVERSATION_ITEMS.iter().copied())
        .shuffled(&mut StdRng::seed_from_u64(5));

    let answers: Vec<(usize, ConversationRule)> =
        board.items().iter().map(|item| (item.id, item.answer)).collect();
    for (id, rule) in answers {
        assert!(board.assign(id, rule));
    }

    assert!(board.is_complete());
    assert_eq!(board.check(), CONVERSATION_ITEMS.len());
}

#[test]
fn test_channel_sort_locks_after_reveal() {
    let mut board = Classifier::new(CHANNEL_ITEMS.iter().copied());
    let first = board.items()[0].id;
    assert!(board.assign(first, Channel::Electronic));

    board.reveal_all();
    assert!(board.is_checked());
    assert_eq!(board.score(), CHANNEL_ITEMS.len());
    assert!(!board.assign(first, Channel::Both));
}

#[test]
fn test_unscramble_every_question() {
    let mut exercise = Unscramble::new(UNSCRAMBLE_QUESTIONS);

    for (n, question) in UNSCRAMBLE_QUESTIONS.iter().enumerate() {
        assert_eq!(exercise.question_number(), n + 1);
        for word in question.words {
            let id = exercise
                .pool()
                .iter()
                .find(|tile| tile.word == *word)
                .map(|tile| tile.id)
                .expect("word left in pool");
            assert!(exercise.place(id));
        }
        assert_eq!(exercise.check(), CheckState::Correct);
        exercise.next_question();
    }

    assert!(exercise.is_finished());
}

#[test]
fn test_letters_accept_contracted_forms() {
    let mut part_one = GapFill::new(LETTER_PART_1.gaps);
    part_one.set_input(0, "'s been collecting");
    part_one.set_input(1, "HAS POSTED ");
    part_one.set_input(2, "has become");
    part_one.check();
    assert_eq!(part_one.score(), 3);

    let mut part_two = GapFill::new(LETTER_PART_2.gaps);
    part_two.set_input(0, "got");
    part_two.check();
    assert_eq!(part_two.result(0), Some(false));
    assert_eq!(part_two.score(), 0);
}

#[test]
fn test_match_every_verb() {
    let mut matching = Matching::new(PREPOSITION_PAIRS);

    for (verb, (_, prep)) in PREPOSITION_PAIRS.iter().enumerate() {
        assert!(matching.select_verb(verb));
        let index = matching
            .prepositions()
            .iter()
            .position(|p| p == prep)
            .expect("preposition listed");
        assert_eq!(matching.choose(index), MatchResult::Solved);
    }

    assert!(matching.all_solved());
    assert!(!matching.select_verb(0));
}
