//! Terminal output formatting for the line-mode game

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_board, print_message, print_statistics};
pub use formatters::{create_progress_bar, guess_row, letter_tile};
