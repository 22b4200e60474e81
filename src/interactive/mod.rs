//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{key_input, run_tui};
pub use rendering::{cell_color, ui};
