//! Rebuild a question from shuffled word tiles

use crate::content::lesson::UnscrambleQuestion;

/// A word tile; ids stay unique even when words repeat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pending,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unscramble {
    questions: Vec<UnscrambleQuestion>,
    current: usize,
    pool: Vec<Tile>,
    placed: Vec<Tile>,
    state: CheckState,
}

impl Unscramble {
    pub fn new(questions: &[UnscrambleQuestion]) -> Self {
        let mut exercise = Self {
            questions: questions.to_vec(),
            current: 0,
            pool: Vec::new(),
            placed: Vec::new(),
            state: CheckState::Pending,
        };
        exercise.deal();
        exercise
    }

    fn deal(&mut self) {
        self.pool = self
            .questions
            .get(self.current)
            .map(|q| {
                q.scrambled
                    .iter()
                    .enumerate()
                    .map(|(id, word)| Tile {
                        id,
                        word: word.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.placed.clear();
        self.state = CheckState::Pending;
    }

    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn pool(&self) -> &[Tile] {
        &self.pool
    }

    pub fn placed(&self) -> &[Tile] {
        &self.placed
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    fn locked(&self) -> bool {
        self.state == CheckState::Correct
    }

    /// Move a tile from the pool to the end of the sentence
    pub fn place(&mut self, tile_id: usize) -> bool {
        if self.locked() {
            return false;
        }
        match self.pool.iter().position(|tile| tile.id == tile_id) {
            Some(pos) => {
                let tile = self.pool.remove(pos);
                self.placed.push(tile);
                true
            }
            None => false,
        }
    }

    /// Move a tile from the sentence back to the end of the pool
    pub fn return_tile(&mut self, tile_id: usize) -> bool {
        if self.locked() {
            return false;
        }
        match self.placed.iter().position(|tile| tile.id == tile_id) {
            Some(pos) => {
                let tile = self.placed.remove(pos);
                self.pool.push(tile);
                true
            }
            None => false,
        }
    }

    pub fn undo_last(&mut self) -> bool {
        match self.placed.last() {
            Some(tile) => {
                let id = tile.id;
                self.return_tile(id)
            }
            None => false,
        }
    }

    fn sentence(&self) -> String {
        self.placed
            .iter()
            .map(|tile| tile.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Compare the placed sentence with the answer. Does nothing while the
    /// sentence is empty.
    pub fn check(&mut self) -> CheckState {
        if self.placed.is_empty() || self.locked() {
            return self.state;
        }
        let Some(question) = self.questions.get(self.current) else {
            return self.state;
        };

        self.state = if self.sentence() == question.words.join(" ") {
            CheckState::Correct
        } else {
            CheckState::Incorrect
        };
        self.state
    }

    /// Fill in the answer and lock the question
    pub fn show_answer(&mut self) {
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        let offset = question.scrambled.len();
        self.placed = question
            .words
            .iter()
            .enumerate()
            .map(|(i, word)| Tile {
                id: offset + i,
                word: word.to_string(),
            })
            .collect();
        self.pool.clear();
        self.state = CheckState::Correct;
    }

    /// Put every tile back and start the question again
    pub fn retry(&mut self) {
        self.deal();
    }

    pub fn has_next_question(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    /// Advance to the next question once the current one is solved
    pub fn next_question(&mut self) -> bool {
        if !self.locked() || !self.has_next_question() {
            return false;
        }
        self.current += 1;
        self.deal();
        true
    }

    pub fn is_finished(&self) -> bool {
        self.locked() && !self.has_next_question()
    }
}
