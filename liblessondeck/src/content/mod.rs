//! Static lesson content
//!
//! Plain data: the wordlist and the tables behind the authored slides.

pub mod lesson;
pub mod vocab;

pub use vocab::{unit1_vocab, validate_vocab};
