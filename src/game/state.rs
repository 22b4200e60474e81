//! Game state types
//!
//! State structures owned by the Game state machine.

use std::time::Duration;

use crate::core::LetterScore;

/// Number of guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// How long an expiring message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_millis(2000);

/// Message shown when the dictionary rejects a guess
pub const INVALID_WORD_MESSAGE: &str = "Not a valid word!";

/// Message shown when the target word cannot be fetched
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load word.";

/// Message shown on a win
pub const WIN_MESSAGE: &str = "Congratulations! You won! 🎉";

/// Lifecycle of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the word provider.
    Loading,
    /// Word acquisition failed; waiting for an explicit retry.
    Error(String),
    /// Accepting guesses.
    InProgress,
    /// The target was guessed.
    Won,
    /// All attempts used without a win.
    Lost,
}

impl RoundState {
    /// Whether the round has ended with a verdict
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A user-facing status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Identifier matched against `MessageExpired`.
    pub id: u64,
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
}

/// Results across all rounds played in this process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Win rate in percent (0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// One square of the 6×5 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Letter shown in the square, if any.
    pub letter: Option<char>,
    /// Score for submitted rows; `None` for the row being typed and empty rows.
    pub score: Option<LetterScore>,
}
