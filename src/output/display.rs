//! Display functions for the line-mode game

use super::formatters::{create_progress_bar, guess_row};
use crate::game::{Game, MAX_ATTEMPTS, MessageStyle, Statistics};
use colored::Colorize;

/// Print the welcome banner and instructions
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Clone - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {MAX_ATTEMPTS} tries.");
    println!(
        "  {} = correct letter and position",
        "Green".green().bold()
    );
    println!(
        "  {} = correct letter, wrong position",
        "Yellow".yellow().bold()
    );
    println!("  {} = letter not in word", "Gray".bright_black().bold());
    println!("\nCommands: 'quit' to exit, 'new' for a new word\n");
}

/// Print every submitted guess of the current round
pub fn print_board(game: &Game) {
    for (i, guess) in game.history().iter().enumerate() {
        if let Some(pattern) = game.pattern_for(guess) {
            println!(
                "  {}. {}  {}",
                (i + 1).to_string().bright_black(),
                guess_row(guess, &pattern),
                pattern.to_emoji()
            );
        }
    }
}

/// Print the current status message, if any
pub fn print_message(game: &Game) {
    if let Some(message) = game.message() {
        let text = match message.style {
            MessageStyle::Success => message.text.bright_green().bold(),
            MessageStyle::Error => message.text.red().bold(),
        };
        println!("\n  {text}\n");
    }
}

/// Print session statistics with a win distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let max = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("  {guesses}: {} {count}", bar.green());
    }
    println!("{}", "─".repeat(60).cyan());
}
