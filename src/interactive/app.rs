//! TUI event loop and terminal lifecycle

use std::io;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::game::{GameEvent, KeyInput};
use crate::provider::{Dictionary, WordSource};
use crate::runtime::{Control, Runtime};

/// Translate a crossterm key into the game's key vocabulary
#[must_use]
pub fn key_input(key: KeyEvent) -> KeyInput {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Ctrl(c),
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Esc => KeyInput::Esc,
        _ => KeyInput::Other,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<P>(runtime: Runtime<P>) -> Result<()>
where
    P: WordSource + Dictionary + Send + Sync + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, runtime).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B, P>(terminal: &mut Terminal<B>, mut runtime: Runtime<P>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: WordSource + Dictionary + Send + Sync + 'static,
{
    let mut events = EventStream::new();

    runtime.start();
    terminal.draw(|f| super::rendering::ui(f, runtime.game()))?;

    loop {
        let control = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                // Only process key press events (fixes Windows double-input bug)
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    runtime.handle(GameEvent::Key(key_input(key)))
                }
                Some(Ok(Event::Resize(..))) => runtime.handle(GameEvent::Resize),
                Some(Ok(_)) => Control::Idle,
                Some(Err(e)) => return Err(e.into()),
                None => Control::Quit,
            },
            Some(event) = runtime.next_event() => runtime.handle(event),
        };

        match control {
            Control::Quit => break,
            Control::Render => {
                terminal.draw(|f| super::rendering::ui(f, runtime.game()))?;
            }
            Control::Idle => {}
        }
    }

    tracing::info!(
        games = runtime.game().stats().total_games,
        won = runtime.game().stats().games_won,
        "session ended"
    );
    Ok(())
}
