//! Type the missing verb forms into a text

use crate::content::lesson::GapSpec;

/// Normalize a typed answer for comparison
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether `input` matches one of `accepted`
///
/// The contracted form is also accepted: "has become" matches "'s become".
pub fn is_accepted(input: &str, accepted: &[&str]) -> bool {
    let value = normalize(input);
    accepted.iter().any(|answer| {
        value == *answer || value == answer.replacen("has ", "'s ", 1)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapFill {
    gaps: Vec<GapSpec>,
    inputs: Vec<String>,
    checked: bool,
}

impl GapFill {
    pub fn new(gaps: &[GapSpec]) -> Self {
        Self {
            gaps: gaps.to_vec(),
            inputs: vec![String::new(); gaps.len()],
            checked: false,
        }
    }

    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn hint(&self, gap: usize) -> Option<&'static str> {
        self.gaps.get(gap).map(|spec| spec.hint)
    }

    pub fn input(&self, gap: usize) -> &str {
        self.inputs.get(gap).map(String::as_str).unwrap_or("")
    }

    /// Replace the text of a gap. Editing keeps earlier check marks visible,
    /// as they are recomputed from the current text.
    pub fn set_input(&mut self, gap: usize, text: impl Into<String>) {
        if let Some(slot) = self.inputs.get_mut(gap) {
            *slot = text.into();
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn check(&mut self) {
        self.checked = true;
    }

    /// Fill every gap with its first accepted answer and check
    pub fn fill_answers(&mut self) {
        for (slot, spec) in self.inputs.iter_mut().zip(&self.gaps) {
            if let Some(answer) = spec.answers.first() {
                *slot = answer.to_string();
            }
        }
        self.checked = true;
    }

    pub fn is_correct(&self, gap: usize) -> bool {
        match self.gaps.get(gap) {
            Some(spec) => is_accepted(self.input(gap), spec.answers),
            None => false,
        }
    }

    /// Per-gap result once checked
    pub fn result(&self, gap: usize) -> Option<bool> {
        if self.checked {
            Some(self.is_correct(gap))
        } else {
            None
        }
    }

    pub fn score(&self) -> usize {
        (0..self.gaps.len()).filter(|i| self.is_correct(*i)).count()
    }
}
