//! Core domain types for the game
//!
//! Words and per-letter scoring. Everything here is pure and synchronous.

mod pattern;
mod word;

pub use pattern::{LetterScore, Pattern, ScoringRule, classify};
pub use word::{WORD_LENGTH, Word, WordError};
