//! Simple line-mode game
//!
//! Text-based play without a TUI: one guess per line on stdin, colored rows on
//! stdout. Each line is replayed into the game as key presses, so the rules
//! are exactly those of the TUI.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameEvent, KeyInput, MAX_ATTEMPTS, RoundState};
use crate::output::{print_banner, print_board, print_message, print_statistics};
use crate::provider::{Dictionary, WordSource};
use crate::runtime::Runtime;

type InputLines = Lines<BufReader<Stdin>>;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// the prompt.
pub async fn run_simple<P>(mut runtime: Runtime<P>) -> Result<()>
where
    P: WordSource + Dictionary + Send + Sync + 'static,
{
    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    runtime.start();

    loop {
        match runtime.game().round().clone() {
            RoundState::Loading => {
                let spinner = loading_spinner();
                let loaded = |game: &Game| *game.round() != RoundState::Loading;
                settle(&mut runtime, loaded).await;
                spinner.finish_and_clear();
            }
            RoundState::Error(message) => {
                println!("\n❌ {}\n", message.red().bold());
                if !confirm(&mut lines, "Try again? (yes/no)").await? {
                    return Ok(());
                }
                runtime.handle(GameEvent::Restart);
            }
            RoundState::Won | RoundState::Lost => {
                print_message(runtime.game());
                print_statistics(runtime.game().stats());
                if !confirm(&mut lines, "Play again? (yes/no)").await? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                runtime.handle(GameEvent::Restart);
            }
            RoundState::InProgress => {
                let attempt = runtime.game().history().len() + 1;
                let label = format!("Guess {attempt}/{MAX_ATTEMPTS}");
                let Some(input) = prompt(&mut lines, &label).await? else {
                    return Ok(());
                };

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "new" | "n" => {
                        println!("\n🔄 New word requested!\n");
                        runtime.handle(GameEvent::Key(KeyInput::Ctrl('r')));
                        continue;
                    }
                    _ => {}
                }

                if !submit_line(&mut runtime, &input) {
                    println!("❌ Word must be exactly {WORD_LENGTH} letters!\n");
                    continue;
                }

                let before = runtime.game().history().len();
                settle(&mut runtime, |game| !game.is_validating()).await;

                if runtime.game().history().len() > before {
                    println!();
                    print_board(runtime.game());
                    println!();
                } else {
                    print_message(runtime.game());
                }
            }
        }
    }
}

/// Replay a line as key presses followed by Enter.
///
/// Returns `false` without submitting if the line is not five letters.
fn submit_line<P>(runtime: &mut Runtime<P>, line: &str) -> bool
where
    P: WordSource + Dictionary + Send + Sync + 'static,
{
    while !runtime.game().current_guess().is_empty() {
        runtime.handle(GameEvent::Key(KeyInput::Backspace));
    }
    for c in line.chars() {
        runtime.handle(GameEvent::Key(KeyInput::Char(c)));
    }

    if line.chars().count() != WORD_LENGTH || runtime.game().current_guess().len() != WORD_LENGTH {
        return false;
    }

    runtime.handle(GameEvent::Key(KeyInput::Enter));
    runtime.game().is_validating()
}

/// Process posted results until `done` holds.
async fn settle<P>(runtime: &mut Runtime<P>, done: impl Fn(&Game) -> bool)
where
    P: WordSource + Dictionary + Send + Sync + 'static,
{
    while !done(runtime.game()) {
        let Some(event) = runtime.next_event().await else {
            break;
        };
        runtime.handle(event);
    }
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading word...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Read one trimmed line after a prompt; `None` on end of input.
async fn prompt(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let line = lines.next_line().await?;
    Ok(line.map(|line| line.trim().to_string()))
}

async fn confirm(lines: &mut InputLines, label: &str) -> Result<bool> {
    let answer = prompt(lines, label).await?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}
