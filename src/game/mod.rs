//! Game state machine
//!
//! Pure state machine for one player session. Key presses and async results
//! come in as [`GameEvent`]s; work to perform (fetches, dictionary checks,
//! timers, redraws) goes out as [`GameAction`]s. No I/O happens here.
//!
//! # Generations
//!
//! Every (re)start of a round bumps a generation counter. Async requests carry
//! the generation they were issued for, and replies from an older generation
//! are dropped, so a reset while a fetch is in flight cannot be overwritten by
//! the stale reply.

mod action;
mod event;
mod state;

pub use action::GameAction;
pub use event::{GameEvent, KeyInput};
pub use state::{
    Cell, INVALID_WORD_MESSAGE, LOAD_FAILED_MESSAGE, MAX_ATTEMPTS, MESSAGE_TTL, Message,
    MessageStyle, RoundState, Statistics, WIN_MESSAGE,
};

use crate::core::{Pattern, ScoringRule, WORD_LENGTH, Word};

/// Game state machine.
#[derive(Debug, Clone)]
pub struct Game {
    scoring: ScoringRule,
    round: RoundState,
    target: Option<Word>,
    current_guess: String,
    history: Vec<Word>,
    message: Option<Message>,
    generation: u64,
    next_message_id: u64,
    /// A `ValidateGuess` is outstanding for this round.
    validating: bool,
    stats: Statistics,
}

impl Game {
    /// Create a game in the Loading state. Call [`Game::start_round`] to get
    /// the first fetch going.
    #[must_use]
    pub fn new(scoring: ScoringRule) -> Self {
        Self {
            scoring,
            round: RoundState::Loading,
            target: None,
            current_guess: String::new(),
            history: Vec::new(),
            message: None,
            generation: 0,
            next_message_id: 0,
            validating: false,
            stats: Statistics::default(),
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: GameEvent) -> Vec<GameAction> {
        match event {
            GameEvent::Key(key) => self.handle_key(key),
            GameEvent::Resize => vec![GameAction::Render],
            GameEvent::Restart => self.start_round(),
            GameEvent::TargetAcquired { generation, word } => {
                if generation != self.generation || self.round != RoundState::Loading {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping stale target"
                    );
                    return vec![];
                }
                tracing::info!(generation, "round started");
                self.target = Some(word);
                self.round = RoundState::InProgress;
                vec![GameAction::Render]
            }
            GameEvent::TargetFailed { generation, reason } => {
                if generation != self.generation || self.round != RoundState::Loading {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping stale failure"
                    );
                    return vec![];
                }
                tracing::error!(generation, %reason, "failed to load word");
                self.round = RoundState::Error(LOAD_FAILED_MESSAGE.to_string());
                vec![GameAction::Render]
            }
            GameEvent::GuessChecked {
                generation,
                guess,
                valid,
            } => {
                if generation != self.generation
                    || self.round != RoundState::InProgress
                    || !self.validating
                {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping stale verdict"
                    );
                    return vec![];
                }
                self.validating = false;
                if valid {
                    self.apply_guess(guess);
                    vec![GameAction::Render]
                } else {
                    let id = self.show_message(INVALID_WORD_MESSAGE, MessageStyle::Error);
                    vec![
                        GameAction::ScheduleMessageClear {
                            id,
                            after: MESSAGE_TTL,
                        },
                        GameAction::Render,
                    ]
                }
            }
            GameEvent::MessageExpired { id } => {
                if self.message.as_ref().is_some_and(|m| m.id == id) {
                    self.message = None;
                    vec![GameAction::Render]
                } else {
                    vec![]
                }
            }
        }
    }

    /// Reset the board and request a new target word.
    pub fn start_round(&mut self) -> Vec<GameAction> {
        self.generation += 1;
        self.round = RoundState::Loading;
        self.target = None;
        self.current_guess.clear();
        self.history.clear();
        self.message = None;
        self.validating = false;

        tracing::debug!(generation = self.generation, "requesting target word");
        vec![
            GameAction::FetchTarget {
                generation: self.generation,
            },
            GameAction::Render,
        ]
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<GameAction> {
        match key {
            KeyInput::Esc | KeyInput::Ctrl('c' | 'C') => return vec![GameAction::Quit],
            KeyInput::Ctrl('r' | 'R') => return self.start_round(),
            _ => {}
        }

        // Play Again / Try Again
        let restartable = self.round.is_over() || matches!(self.round, RoundState::Error(_));
        match self.round {
            RoundState::InProgress => self.edit_guess(key),
            _ if restartable && key == KeyInput::Enter => self.start_round(),
            _ => vec![],
        }
    }

    /// Input handling while a round is in progress.
    fn edit_guess(&mut self, key: KeyInput) -> Vec<GameAction> {
        match key {
            KeyInput::Enter if self.current_guess.len() == WORD_LENGTH => self.submit(),
            KeyInput::Backspace => {
                if self.current_guess.pop().is_some() {
                    vec![GameAction::Render]
                } else {
                    vec![]
                }
            }
            KeyInput::Char(c)
                if c.is_ascii_alphabetic() && self.current_guess.len() < WORD_LENGTH =>
            {
                self.current_guess.push(c.to_ascii_uppercase());
                vec![GameAction::Render]
            }
            _ => vec![],
        }
    }

    fn submit(&mut self) -> Vec<GameAction> {
        if self.validating {
            return vec![];
        }
        let Ok(guess) = Word::new(&self.current_guess) else {
            return vec![];
        };

        self.validating = true;
        vec![
            GameAction::ValidateGuess {
                generation: self.generation,
                guess,
            },
            GameAction::Render,
        ]
    }

    fn apply_guess(&mut self, guess: Word) {
        let Some(target) = self.target.clone() else {
            return;
        };

        self.history.push(guess.clone());
        self.current_guess.clear();
        self.message = None;

        if guess == target {
            self.round = RoundState::Won;
            self.stats.record_win(self.history.len());
            self.show_message(WIN_MESSAGE, MessageStyle::Success);
            tracing::info!(guesses = self.history.len(), "round won");
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.round = RoundState::Lost;
            self.stats.record_loss();
            let reveal = format!("Game Over! The word was {target}");
            self.show_message(&reveal, MessageStyle::Error);
            tracing::info!("round lost");
        }
    }

    fn show_message(&mut self, text: &str, style: MessageStyle) -> u64 {
        self.next_message_id += 1;
        let id = self.next_message_id;
        self.message = Some(Message {
            id,
            text: text.to_string(),
            style,
        });
        id
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a submitted guess is waiting on the dictionary
    #[must_use]
    pub const fn is_validating(&self) -> bool {
        self.validating
    }

    /// Score a submitted guess against the current target
    #[must_use]
    pub fn pattern_for(&self, guess: &Word) -> Option<Pattern> {
        self.target
            .as_ref()
            .map(|target| Pattern::score(guess, target, self.scoring))
    }

    /// The board as the player sees it
    ///
    /// Submitted rows carry scores, the row after them shows the guess being
    /// typed, the rest are empty.
    #[must_use]
    pub fn grid(&self) -> [[Cell; WORD_LENGTH]; MAX_ATTEMPTS] {
        let mut grid = [[Cell::default(); WORD_LENGTH]; MAX_ATTEMPTS];

        for (row, guess) in grid.iter_mut().zip(&self.history) {
            let pattern = self.pattern_for(guess);
            for (i, (cell, &letter)) in row.iter_mut().zip(guess.letters()).enumerate() {
                cell.letter = Some(char::from(letter));
                cell.score = pattern.map(|p| p.scores()[i]);
            }
        }

        if let Some(row) = grid.get_mut(self.history.len()) {
            for (cell, letter) in row.iter_mut().zip(self.current_guess.chars()) {
                cell.letter = Some(letter);
            }
        }

        grid
    }
}
