//! Game events
//!
//! Inputs to the [`Game`](super::Game) state machine: key presses from the
//! front end and results of async work posted back by the runtime.

use crate::core::Word;

/// Terminal-agnostic keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Character pressed together with Control.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Escape key (quit).
    Esc,
    /// Anything else.
    Other,
}

/// Events processed by the Game state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize; only triggers a redraw.
    Resize,

    /// Start a new round (also used to retry after a failed fetch).
    Restart,

    /// The word provider produced a dictionary-checked target word.
    TargetAcquired {
        /// Round the fetch was issued for.
        generation: u64,
        /// The new target.
        word: Word,
    },

    /// The word provider failed hard.
    TargetFailed {
        /// Round the fetch was issued for.
        generation: u64,
        /// Diagnostic description of the failure.
        reason: String,
    },

    /// Dictionary verdict for a submitted guess.
    GuessChecked {
        /// Round the guess was submitted in.
        generation: u64,
        /// The submitted guess.
        guess: Word,
        /// Whether the dictionary knows the word.
        valid: bool,
    },

    /// A transient message reached its expiry.
    MessageExpired {
        /// Identifier of the message the timer was started for.
        id: u64,
    },
}
