//! Action executor
//!
//! Owns the [`Game`] and carries out the actions it emits. Async work (word
//! acquisition, dictionary checks, message timers) is spawned onto tokio and
//! reports back through a channel as [`GameEvent`]s, so the front end's event
//! loop never blocks on the network.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::game::{Game, GameAction, GameEvent};
use crate::provider::{Dictionary, RetryPolicy, WordSource, acquire_target_word, validate_guess};

/// What the front end has to do after an event was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Nothing visible changed.
    Idle,
    /// Redraw.
    Render,
    /// Leave the event loop.
    Quit,
}

/// Drives a [`Game`] against a word provider.
pub struct Runtime<P> {
    game: Game,
    provider: Arc<P>,
    retry: RetryPolicy,
    tx: UnboundedSender<GameEvent>,
    rx: UnboundedReceiver<GameEvent>,
}

impl<P> Runtime<P>
where
    P: WordSource + Dictionary + Send + Sync + 'static,
{
    pub fn new(game: Game, provider: Arc<P>, retry: RetryPolicy) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            game,
            provider,
            retry,
            tx,
            rx,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Begin a fresh round.
    pub fn start(&mut self) -> Control {
        let actions = self.game.start_round();
        self.perform(actions)
    }

    /// Feed an event to the game and execute the resulting actions.
    pub fn handle(&mut self, event: GameEvent) -> Control {
        let actions = self.game.handle(event);
        self.perform(actions)
    }

    /// Wait for the next result posted by spawned work.
    ///
    /// The runtime keeps a sender of its own, so this only returns `None` if
    /// the channel is closed from outside.
    pub async fn next_event(&mut self) -> Option<GameEvent> {
        self.rx.recv().await
    }

    fn perform(&self, actions: Vec<GameAction>) -> Control {
        let mut control = Control::Idle;

        for action in actions {
            match action {
                GameAction::Render => control = Control::Render,
                GameAction::Quit => return Control::Quit,
                GameAction::FetchTarget { generation } => self.spawn_fetch(generation),
                GameAction::ValidateGuess { generation, guess } => {
                    let provider = Arc::clone(&self.provider);
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let valid = validate_guess(provider.as_ref(), &guess).await;
                        // Receiver gone means the app is shutting down
                        let _ = tx.send(GameEvent::GuessChecked {
                            generation,
                            guess,
                            valid,
                        });
                    });
                }
                GameAction::ScheduleMessageClear { id, after } => {
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(GameEvent::MessageExpired { id });
                    });
                }
            }
        }

        control
    }

    fn spawn_fetch(&self, generation: u64) {
        let provider = Arc::clone(&self.provider);
        let retry = self.retry;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let source = provider.as_ref();
            let event = match acquire_target_word(source, source, &retry).await {
                Ok(word) => GameEvent::TargetAcquired { generation, word },
                Err(err) => GameEvent::TargetFailed {
                    generation,
                    reason: err.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }
}
