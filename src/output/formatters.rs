//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{LetterScore, Pattern, Word};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, score: LetterScore) -> ColoredString {
    let tile = format!(" {letter} ").black().bold();
    match score {
        LetterScore::Exact => tile.on_green(),
        LetterScore::Present => tile.on_yellow(),
        LetterScore::Absent => tile.on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, pattern: &Pattern) -> String {
    guess
        .as_str()
        .chars()
        .zip(pattern.scores())
        .map(|(letter, &score)| letter_tile(letter, score).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
