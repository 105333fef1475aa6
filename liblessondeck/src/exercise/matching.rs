//! Match verbs with their dependent prepositions

use std::collections::BTreeSet;
use std::time::Duration;

use crate::timer::Flash;

/// How long the "try again" marker stays up
pub const ERROR_FLASH: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Solved,
    Wrong,
    /// No verb selected
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    pairs: Vec<(&'static str, &'static str)>,
    prepositions: Vec<&'static str>,
    selected: Option<usize>,
    solved: Vec<bool>,
    error: Flash,
}

impl Matching {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let prepositions = pairs
            .iter()
            .map(|(_, prep)| *prep)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            pairs: pairs.to_vec(),
            prepositions,
            selected: None,
            solved: vec![false; pairs.len()],
            error: Flash::default(),
        }
    }

    pub fn verbs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(verb, _)| *verb)
    }

    /// Distinct prepositions, sorted
    pub fn prepositions(&self) -> &[&'static str] {
        &self.prepositions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_solved(&self, verb: usize) -> bool {
        self.solved.get(verb).copied().unwrap_or(false)
    }

    pub fn all_solved(&self) -> bool {
        self.solved.iter().all(|s| *s)
    }

    pub fn solved_count(&self) -> usize {
        self.solved.iter().filter(|s| **s).count()
    }

    pub fn show_error(&self) -> bool {
        self.error.is_active()
    }

    /// Select a verb. Solved verbs cannot be selected.
    pub fn select_verb(&mut self, verb: usize) -> bool {
        if verb >= self.pairs.len() || self.is_solved(verb) {
            return false;
        }
        self.selected = Some(verb);
        self.error.clear();
        true
    }

    /// Pair the selected verb with the preposition at `prep`
    pub fn choose(&mut self, prep: usize) -> MatchResult {
        let (Some(verb), Some(choice)) = (self.selected, self.prepositions.get(prep)) else {
            return MatchResult::Ignored;
        };

        if self.pairs[verb].1 == *choice {
            self.solved[verb] = true;
            self.selected = None;
            MatchResult::Solved
        } else {
            self.error.trigger(ERROR_FLASH);
            MatchResult::Wrong
        }
    }

    pub fn reveal_all(&mut self) {
        self.solved.iter_mut().for_each(|s| *s = true);
        self.selected = None;
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.error.tick(elapsed);
    }

    pub fn answer(&self, verb: usize) -> Option<&'static str> {
        self.pairs.get(verb).map(|(_, prep)| *prep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::lesson::PREPOSITION_PAIRS;

    fn prep_index(matching: &Matching, prep: &str) -> usize {
        matching.prepositions().iter().position(|p| *p == prep).unwrap()
    }

    #[test]
    fn test_prepositions_unique_and_sorted() {
        let matching = Matching::new(PREPOSITION_PAIRS);
        assert_eq!(
            matching.prepositions(),
            &["from", "in", "of", "on", "to", "with"]
        );
    }

    #[test]
    fn test_correct_pair_solves_verb() {
        let mut matching = Matching::new(PREPOSITION_PAIRS);
        matching.select_verb(0);
        let on = prep_index(&matching, "on");

        assert_eq!(matching.choose(on), MatchResult::Solved);
        assert!(matching.is_solved(0));
        assert_eq!(matching.selected(), None);
        assert!(!matching.select_verb(0));
    }

    #[test]
    fn test_wrong_pair_flashes_for_a_second() {
        let mut matching = Matching::new(PREPOSITION_PAIRS);
        matching.select_verb(1);
        let of = prep_index(&matching, "of");

        assert_eq!(matching.choose(of), MatchResult::Wrong);
        assert!(matching.show_error());
        assert_eq!(matching.selected(), Some(1));

        matching.tick(Duration::from_millis(1000));
        assert!(!matching.show_error());
    }

    #[test]
    fn test_choose_without_verb_is_ignored() {
        let mut matching = Matching::new(PREPOSITION_PAIRS);
        assert_eq!(matching.choose(0), MatchResult::Ignored);
    }

    #[test]
    fn test_reveal_all() {
        let mut matching = Matching::new(PREPOSITION_PAIRS);
        matching.reveal_all();
        assert!(matching.all_solved());
        assert_eq!(matching.solved_count(), 7);
    }
}
