//! TUI rendering with ratatui
//!
//! The board, status line and key help as a pure function of [`Game`] state.

use crate::core::LetterScore;
use crate::game::{Cell, Game, MessageStyle, RoundState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Background color of a board square
#[must_use]
pub const fn cell_color(cell: &Cell) -> Color {
    match cell.score {
        Some(LetterScore::Exact) => Color::Green,
        Some(LetterScore::Present) => Color::Yellow,
        Some(LetterScore::Absent) => Color::Gray,
        None => Color::DarkGray,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, game: &Game) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(13),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match game.round() {
        RoundState::Loading => render_notice(f, chunks[1], "Loading word...", Color::White),
        RoundState::Error(message) => render_notice(f, chunks[1], message, Color::Red),
        RoundState::InProgress | RoundState::Won | RoundState::Lost => {
            render_board(f, game, chunks[1]);
        }
    }

    render_message(f, game, chunks[2]);
    render_status(f, game, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE CLONE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_notice(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let notice = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, area);
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines = Vec::new();

    for row in game.grid() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in &row {
            let letter = cell.letter.unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(cell_color(cell))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        spans.pop();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, game: &Game, area: Rect) {
    let (text, style) = match game.message() {
        Some(msg) => {
            let color = match msg.style {
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (
                msg.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None if game.is_validating() => ("Checking...", Style::default().fg(Color::DarkGray)),
        None => ("", Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = game.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(stats, chunks[0]);

    let help_text = match game.round() {
        RoundState::Loading => "Esc: Quit",
        RoundState::Error(_) => "Enter: Try Again | Esc: Quit",
        RoundState::Won | RoundState::Lost => "Enter: Play Again | Esc: Quit",
        RoundState::InProgress => "Type letters | Enter: Submit | Ctrl+R: New Word | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoringRule, Word};
    use crate::game::{GameEvent, KeyInput};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, game)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn loading_screen() {
        let mut game = Game::new(ScoringRule::Simple);
        game.start_round();
        assert!(screen(&game).contains("Loading word..."));
    }

    #[test]
    fn error_screen_offers_retry() {
        let mut game = Game::new(ScoringRule::Simple);
        game.start_round();
        game.handle(GameEvent::TargetFailed {
            generation: 1,
            reason: "offline".into(),
        });
        let text = screen(&game);
        assert!(text.contains("Failed to load word."));
        assert!(text.contains("Enter: Try Again"));
    }

    #[test]
    fn board_shows_typed_letters() {
        let mut game = Game::new(ScoringRule::Simple);
        game.start_round();
        game.handle(GameEvent::TargetAcquired {
            generation: 1,
            word: Word::new("crane").unwrap(),
        });
        game.handle(GameEvent::Key(KeyInput::Char('q')));
        assert!(screen(&game).contains(" Q "));
    }

    #[test]
    fn cell_colors_follow_scores() {
        let color = |score| {
            cell_color(&Cell {
                letter: Some('A'),
                score,
            })
        };
        assert_eq!(color(Some(LetterScore::Exact)), Color::Green);
        assert_eq!(color(Some(LetterScore::Present)), Color::Yellow);
        assert_eq!(color(Some(LetterScore::Absent)), Color::Gray);
        assert_eq!(color(None), Color::DarkGray);
    }
}
