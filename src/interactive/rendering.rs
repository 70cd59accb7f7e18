//! TUI rendering with ratatui
//!
//! Draws the board, keyboard and overlays from a game [`Snapshot`] only.

use super::app::{App, MessageStyle};
use crate::core::{Cell, Color as Hint, KeyboardHints};
use crate::game::{GameState, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.game.snapshot();
    let board_height = u16::try_from(snapshot.max_rows * 2 + 1).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Length(3),            // Messages
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, &snapshot, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_keyboard(f, &snapshot, chunks[2]);
    render_message(f, app, chunks[3]);
    render_status(f, app, &snapshot, chunks[4]);

    match snapshot.state {
        GameState::Settings => render_settings(f, &snapshot),
        GameState::Win | GameState::Loss => render_result(f, &snapshot),
        GameState::Idle => {}
    }
}

fn render_header(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut spans = vec![Span::styled(
        "WORDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if snapshot.settings.hard_mode {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "HARD",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(cell: &Cell) -> Style {
    let filled = Style::default().add_modifier(Modifier::BOLD);
    match cell.color {
        Hint::Green => filled.fg(Color::White).bg(Color::Green),
        Hint::Yellow => filled.fg(Color::Black).bg(Color::Yellow),
        Hint::Gray => filled.fg(Color::White).bg(Color::DarkGray),
        Hint::Default if cell.letter.is_some() => filled.fg(Color::White),
        Hint::Default => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut lines = Vec::with_capacity(snapshot.rows.len() * 2);
    for row in snapshot.rows {
        let spans: Vec<Span> = row
            .iter()
            .flat_map(|cell| {
                let letter = cell.letter.unwrap_or('_');
                [
                    Span::styled(format!(" {letter} "), cell_style(cell)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn key_style(hint: Hint) -> Style {
    match hint {
        Hint::Green => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Hint::Yellow => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Hint::Gray => Style::default().fg(Color::DarkGray),
        Hint::Default => Style::default().fg(Color::Gray),
    }
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = KeyboardHints::LAYOUT
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|key| Span::styled(format!(" {key} "), key_style(snapshot.hints.get(key))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = app.toast.as_ref().map_or_else(
        || (String::new(), Style::default()),
        |toast| {
            let style = match toast.message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            };
            (format!(" {} ", toast.message.text), style)
        },
    );

    let message = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Messages "));
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let help_text = if snapshot.state.is_terminal() {
        "r: Restart | Esc: Quit"
    } else {
        "Enter: Submit | @: Settings | Esc: Quit"
    };

    let status = Line::from(vec![
        Span::styled(
            format!("Attempt {}/{}", snapshot.attempt, snapshot.max_rows),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " | Games: {} | Win Rate: {:.0}% | ",
            app.stats.total_games,
            app.stats.win_rate()
        )),
        Span::styled(help_text, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), area);
}

/// A `width`×`height` rectangle centred in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_settings(f: &mut Frame, snapshot: &Snapshot) {
    let area = centered_rect(40, 8, f.area());

    let status = if snapshot.settings.hard_mode {
        Span::styled("[ ON  ]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("[ OFF ]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    };

    let content = vec![
        Line::default(),
        Line::from(vec![Span::raw("HARD MODE: "), status]),
        Line::default(),
        Line::from(Span::styled(
            "Enter: Toggle    @/Esc: Back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

fn render_result(f: &mut Frame, snapshot: &Snapshot) {
    let (headline, color) = match (snapshot.state, snapshot.secret) {
        (GameState::Loss, Some(secret)) => (format!("You lost! The word was {secret}"), Color::Red),
        _ => (
            format!(
                "You won in {} {}!",
                snapshot.attempt,
                if snapshot.attempt == 1 { "attempt" } else { "attempts" }
            ),
            Color::Green,
        ),
    };

    let mut content = vec![
        Line::default(),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(snapshot.score_line()),
    ];
    content.extend(snapshot.emoji_grid().lines().map(|line| Line::from(line.to_string())));
    content.push(Line::default());
    content.push(Line::from(Span::styled(
        "r: Restart    Esc: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = u16::try_from(content.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(44, height, f.area());
    let panel = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}
