//! Exercise state machines
//!
//! Pure state behind the interactive slides. Each mounted slide owns its
//! own instance; nothing here is shared between slides.

pub mod choice;
pub mod classify;
pub mod gap_fill;
pub mod matching;
pub mod unscramble;

pub use choice::SingleChoice;
pub use classify::{ClassifyItem, Classifier};
pub use gap_fill::GapFill;
pub use matching::{MatchResult, Matching};
pub use unscramble::{CheckState, Tile, Unscramble};
