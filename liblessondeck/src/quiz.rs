//! Vocabulary quiz generation
//!
//! Each quiz slide asks for the word that completes an example sentence.
//! Options are the correct word plus distractors drawn from the rest of the
//! wordlist. Randomness is injected so tests can seed it.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use tracing::{debug, warn};

use crate::types::VocabEntry;

/// Placeholder shown in place of the target word
pub const BLANK: &str = "_______";

/// Default number of distractor options
pub const DEFAULT_DISTRACTORS: usize = 3;

/// Most distractors a quiz can carry while every option keeps a digit key
pub const MAX_DISTRACTORS: usize = 8;

/// Pick up to `count` distractor words for `entry`
///
/// Entries sharing the id or the word of `entry` are never picked, and each
/// word appears at most once.
pub fn pick_distractors<R: Rng + ?Sized>(
    entry: &VocabEntry,
    table: &[Arc<VocabEntry>],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool: Vec<String> = table
        .iter()
        .filter(|other| other.id != entry.id && other.word != entry.word)
        .filter(|other| seen.insert(other.word.as_str()))
        .map(|other| other.word.clone())
        .collect();

    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// First word of a headword with parenthetical qualifiers removed
///
/// `"adapt (to)"` becomes `"adapt"`.
pub fn root_word(word: &str) -> &str {
    word.split_whitespace()
        .find(|token| !token.starts_with('('))
        .map(|token| token.trim_matches(|c| c == '(' || c == ')'))
        .unwrap_or("")
}

/// Replace every word starting with the root of `word` by [`BLANK`]
///
/// Matching is case-insensitive and anchored at a word boundary, so
/// "adapt" also masks "adapted" and "Adapting".
pub fn mask_example(sentence: &str, word: &str) -> String {
    let root = root_word(word);
    if root.is_empty() {
        return sentence.to_string();
    }

    let pattern = format!(r"(?i)\b{}\w*", regex::escape(root));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(sentence, BLANK).into_owned(),
        Err(e) => {
            warn!(word, error = %e, "Could not build mask pattern");
            sentence.to_string()
        }
    }
}

/// Result of answering a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// One generated quiz: prompt, options and the learner's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabQuiz {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    outcome: Option<QuizOutcome>,
}

impl VocabQuiz {
    pub fn generate<R: Rng + ?Sized>(
        entry: &VocabEntry,
        table: &[Arc<VocabEntry>],
        distractors: usize,
        rng: &mut R,
    ) -> Self {
        let mut options = vec![entry.word.clone()];
        options.extend(pick_distractors(entry, table, distractors, rng));
        options.shuffle(rng);

        let correct_index = options
            .iter()
            .position(|option| *option == entry.word)
            .unwrap_or(0);

        let prompt = match entry.examples.choose(rng) {
            Some(example) => mask_example(example, &entry.word),
            None => entry.definitions.en.clone(),
        };

        debug!(id = %entry.id, options = options.len(), correct_index, "Generated quiz");

        Self {
            prompt,
            options,
            correct_index,
            outcome: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.outcome
    }

    pub fn is_answered(&self) -> bool {
        self.outcome.is_some()
    }

    /// Record an answer. Only the first valid selection counts; later
    /// selections and out-of-range indices return `None`.
    pub fn select(&mut self, index: usize) -> Option<QuizOutcome> {
        if self.outcome.is_some() || index >= self.options.len() {
            return None;
        }

        let outcome = QuizOutcome {
            selected: index,
            correct_index: self.correct_index,
            is_correct: index == self.correct_index,
        };
        self.outcome = Some(outcome);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocalizedText;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(id: &str, word: &str, examples: &[&str]) -> Arc<VocabEntry> {
        Arc::new(VocabEntry {
            id: id.to_string(),
            word: word.to_string(),
            pronunciation: String::new(),
            part_of_speech: "v".to_string(),
            definitions: LocalizedText::english(format!("definition of {word}")),
            examples: examples.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_root_word() {
        assert_eq!(root_word("adapt (to)"), "adapt");
        assert_eq!(root_word("get on with"), "get");
        assert_eq!(root_word("stationery"), "stationery");
        assert_eq!(root_word(""), "");
    }

    #[test]
    fn test_mask_example_prefix_match() {
        assert_eq!(
            mask_example(
                "The locals adapted the whistling language to Spanish.",
                "adapt (to)"
            ),
            "The locals _______ the whistling language to Spanish."
        );
    }

    #[test]
    fn test_mask_example_is_case_insensitive_and_global() {
        assert_eq!(
            mask_example("Adapt or die. We adapt.", "adapt"),
            "_______ or die. We _______."
        );
    }

    #[test]
    fn test_mask_example_needs_word_boundary() {
        assert_eq!(
            mask_example("She was readapting slowly.", "adapt"),
            "She was readapting slowly."
        );
    }

    #[test]
    fn test_mask_example_escapes_metacharacters() {
        assert_eq!(mask_example("Try a.b and axb", "a.b"), "Try _______ and axb");
    }

    #[test]
    fn test_distractors_exclude_same_id_and_word() {
        let target = entry("one", "adapt", &[]);
        let table = vec![
            Arc::clone(&target),
            entry("two", "adapt", &[]),
            entry("three", "gesture", &[]),
            entry("four", "gesture", &[]),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let picked = pick_distractors(&target, &table, 3, &mut rng);
        assert_eq!(picked, vec!["gesture".to_string()]);
    }

    #[test]
    fn test_generate_four_distinct_options() {
        let table: Vec<_> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|w| entry(w, w, &["x"]))
            .collect();
        let mut rng = StdRng::seed_from_u64(42);

        let quiz = VocabQuiz::generate(&table[0], &table, DEFAULT_DISTRACTORS, &mut rng);

        let unique: HashSet<_> = quiz.options().iter().collect();
        assert_eq!(quiz.options().len(), 4);
        assert_eq!(unique.len(), 4);
        assert_eq!(quiz.options()[quiz.correct_index()], "a");
    }

    #[test]
    fn test_single_entry_table_yields_one_option() {
        let table = vec![entry("solo", "solo", &["A solo act."])];
        let mut rng = StdRng::seed_from_u64(1);

        let quiz = VocabQuiz::generate(&table[0], &table, 3, &mut rng);
        assert_eq!(quiz.options(), &["solo".to_string()]);
        assert_eq!(quiz.prompt(), "A _______ act.");
    }

    #[test]
    fn test_prompt_falls_back_to_definition() {
        let table = vec![entry("bare", "bare", &[])];
        let mut rng = StdRng::seed_from_u64(1);

        let quiz = VocabQuiz::generate(&table[0], &table, 3, &mut rng);
        assert_eq!(quiz.prompt(), "definition of bare");
    }

    #[test]
    fn test_first_selection_is_final() {
        let table: Vec<_> = ["a", "b", "c", "d"].iter().map(|w| entry(w, w, &[])).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut quiz = VocabQuiz::generate(&table[0], &table, 3, &mut rng);

        let wrong = (quiz.correct_index() + 1) % 4;
        let outcome = quiz.select(wrong).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.correct_index, quiz.correct_index());

        assert!(quiz.select(quiz.correct_index()).is_none());
        assert_eq!(quiz.outcome(), Some(outcome));
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let table = vec![entry("a", "a", &[])];
        let mut rng = StdRng::seed_from_u64(3);
        let mut quiz = VocabQuiz::generate(&table[0], &table, 3, &mut rng);

        assert!(quiz.select(5).is_none());
        assert!(!quiz.is_answered());
    }
}
