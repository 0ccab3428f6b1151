//! Stateless UI rendering.

use super::app::App;
use countdown_tictactoe::{Cell, GameView, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Below this many units the clock is drawn as critical.
pub const CRITICAL_UNITS: u32 = 10;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Clock
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let mode = app
        .view()
        .map(|view| view.mode.to_string())
        .unwrap_or_default();
    let title = Paragraph::new(format!("Countdown Tic Tac Toe  [{}]", mode))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if let Some(view) = app.view() {
        draw_clock(frame, chunks[1], view, app.turn_units());
        draw_board(frame, chunks[2], view, app.cursor());
    }

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "arrows/1-9 move  enter play  u undo  r restart  p PvP  a vs AI  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_clock(frame: &mut Frame, area: Rect, view: &GameView, turn_units: u32) {
    let remaining = view.timer.remaining_units;
    let critical = view.timer.running && remaining < CRITICAL_UNITS;
    let color = if critical { Color::Red } else { Color::Green };
    let ratio = f64::from(remaining) / f64::from(turn_units.max(1));

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Time"))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}s", remaining));
    frame.render_widget(gauge, center_rect(area, 40, area.height));
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let winning = view.board.winning_line().map(|won| won.line);
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let highlight = winning.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cols[col * 2], view, pos, pos == cursor, highlight);
            if col < 2 {
                draw_separator(frame, cols[col * 2 + 1], "│");
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], "────────────┼────────────┼────────────");
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    pos: Position,
    under_cursor: bool,
    winning: bool,
) {
    let (symbol, base_style) = match view.board.get(pos) {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::MarkA => (" O ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::MarkB => (" X ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, 12, 1));
}

fn draw_separator(frame: &mut Frame, area: Rect, text: &'static str) {
    let sep = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
