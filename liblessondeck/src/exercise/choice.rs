//! Pick one of several options; the pick may change

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChoice {
    correct: Vec<bool>,
    selected: Option<usize>,
}

impl SingleChoice {
    pub fn new(correct: impl IntoIterator<Item = bool>) -> Self {
        Self {
            correct: correct.into_iter().collect(),
            selected: None,
        }
    }

    pub fn select(&mut self, option: usize) -> bool {
        if option >= self.correct.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the current selection is right; `None` before any pick
    pub fn is_correct(&self) -> Option<bool> {
        self.selected.map(|i| self.correct[i])
    }

    pub fn len(&self) -> usize {
        self.correct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.correct.is_empty()
    }
}
