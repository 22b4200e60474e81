//! Game actions
//!
//! Work the Game state machine asks the runtime to perform.

use std::time::Duration;

use crate::core::Word;

/// Actions produced by the Game state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Redraw the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Run word acquisition and report back with `TargetAcquired` or
    /// `TargetFailed`.
    FetchTarget {
        /// Round the fetch belongs to.
        generation: u64,
    },

    /// Ask the dictionary about a guess and report back with `GuessChecked`.
    ValidateGuess {
        /// Round the guess belongs to.
        generation: u64,
        /// The guess to look up.
        guess: Word,
    },

    /// Post `MessageExpired { id }` after `after` has elapsed.
    ScheduleMessageClear {
        /// Message identifier.
        id: u64,
        /// Delay before expiry.
        after: Duration,
    },
}
