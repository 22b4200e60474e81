//! Wordle Clone
//!
//! A terminal Wordle clone. Target words come from a random-word service and
//! are confirmed by a dictionary service (or both come from a local word list);
//! guesses are typed on the keyboard and scored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{Pattern, ScoringRule, Word};
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let pattern = Pattern::score(&guess, &target, ScoringRule::Simple);
//! println!("{pattern}");
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Target word acquisition and dictionary checks
pub mod provider;

// Local word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Action executor shared by the front ends
pub mod runtime;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
