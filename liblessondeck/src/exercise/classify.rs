//! Sort items into categories

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyItem<C> {
    pub id: usize,
    pub text: String,
    pub answer: C,
    pub assigned: Option<C>,
}

impl<C: Copy + PartialEq> ClassifyItem<C> {
    pub fn is_correct(&self) -> bool {
        self.assigned == Some(self.answer)
    }
}

/// Classification board: every item starts unassigned
///
/// Items can be moved between categories freely until the board is checked
/// or revealed; after that assignments are locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier<C> {
    items: Vec<ClassifyItem<C>>,
    checked: bool,
}

impl<C: Copy + PartialEq> Classifier<C> {
    pub fn new<S: Into<String>>(items: impl IntoIterator<Item = (S, C)>) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(id, (text, answer))| ClassifyItem {
                id,
                text: text.into(),
                answer,
                assigned: None,
            })
            .collect();

        Self {
            items,
            checked: false,
        }
    }

    /// Shuffle display order; ids are kept
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.items.shuffle(rng);
        self
    }

    pub fn items(&self) -> &[ClassifyItem<C>] {
        &self.items
    }

    pub fn item(&self, id: usize) -> Option<&ClassifyItem<C>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items not yet placed in any category, in display order
    pub fn unassigned(&self) -> impl Iterator<Item = &ClassifyItem<C>> {
        self.items.iter().filter(|item| item.assigned.is_none())
    }

    /// Items placed in `category`, in display order
    pub fn in_category(&self, category: C) -> impl Iterator<Item = &ClassifyItem<C>> {
        self.items
            .iter()
            .filter(move |item| item.assigned == Some(category))
    }

    /// Place an item. Returns false when locked or the id is unknown.
    pub fn assign(&mut self, id: usize, category: C) -> bool {
        if self.checked {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.assigned = Some(category);
                true
            }
            None => false,
        }
    }

    pub fn unassign(&mut self, id: usize) -> bool {
        if self.checked {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => item.assigned.take().is_some(),
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| item.assigned.is_some())
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Show results. Returns the number of correctly placed items.
    pub fn check(&mut self) -> usize {
        self.checked = true;
        self.score()
    }

    /// Place every item in its correct category and show results
    pub fn reveal_all(&mut self) {
        for item in &mut self.items {
            item.assigned = Some(item.answer);
        }
        self.checked = true;
    }

    /// Per-item result once checked
    pub fn result(&self, id: usize) -> Option<bool> {
        if !self.checked {
            return None;
        }
        self.item(id).map(ClassifyItem::is_correct)
    }

    pub fn score(&self) -> usize {
        self.items.iter().filter(|item| item.is_correct()).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
