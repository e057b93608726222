//! Rendering for the terminal UI.

use super::app::App;
use crate::game::Mark;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Draws the whole screen: scoreboard, board grid, status/help line, and
/// the result overlay when a round has ended.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_scoreboard(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);

    if let Some(message) = app.overlay() {
        render_overlay(frame, message);
    }
}

fn render_scoreboard(frame: &mut Frame, app: &App, area: Rect) {
    let (x, o) = app.scores();
    let mode = if app.vs_computer() {
        "vs computer"
    } else {
        "two players"
    };
    let line = Line::from(vec![
        Span::styled("X: ", Style::default().fg(Color::Cyan)),
        Span::raw(x.to_string()),
        Span::raw("   "),
        Span::styled("O: ", Style::default().fg(Color::Yellow)),
        Span::raw(o.to_string()),
        Span::raw("   "),
        Span::styled(mode, Style::default().add_modifier(Modifier::ITALIC)),
    ]);
    let paragraph = Paragraph::new(line)
        .centered()
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for row in 0..3 {
        let mut spans = Vec::new();
        for col in 0..3 {
            let index = row * 3 + col;
            let span = match app.cells()[index] {
                Some(Mark::X) => Span::styled(
                    " X ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Some(Mark::O) => Span::styled(
                    " O ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(
                    format!(" {} ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            spans.push(span);
            if col < 2 {
                spans.push(Span::raw("|"));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::from("---+---+---"));
        }
    }
    let paragraph = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(app.status().to_string()),
        Line::from(Span::styled(
            "1-9 place mark | r new round | s reset scores | m toggle mode | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Centered popup showing the round result over the board.
fn render_overlay(frame: &mut Frame, message: &str) {
    let area = centered_rect(30, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Press 'r' to play again"),
    ];
    let paragraph = Paragraph::new(lines)
        .centered()
        .block(Block::default().title("Result").borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, parent: Rect) -> Rect {
    let width = width.min(parent.width);
    let height = 4.min(parent.height);
    Rect {
        x: parent.x + (parent.width.saturating_sub(width)) / 2,
        y: parent.y + (parent.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
