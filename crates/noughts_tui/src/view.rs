//! Stateless UI rendering for tic-tac-toe.

use noughts_core::{Cell, Mark, Position, Round, RoundStatus, ScoreStore, Scores};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::App;
use crate::input::InputController;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 5;

/// Screen rectangles of the nine cells, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Centers a 3x3 grid in `area`, clipping cells that do not fit.
    pub fn new(area: Rect) -> Self {
        let width = CELL_WIDTH * 3;
        let height = CELL_HEIGHT * 3;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;

        let cells = Position::ALL.map(|pos| {
            Rect::new(
                x + pos.col() as u16 * CELL_WIDTH,
                y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });
        Self { cells }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Cell under a terminal coordinate.
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let r = self.cell(*pos);
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

/// Status text for a round.
pub fn status_line(round: &Round) -> String {
    match round.status() {
        RoundStatus::InProgress => format!("Turn: {}", round.current_player()),
        RoundStatus::Won { winner, .. } => format!("Winner: {}", winner),
        RoundStatus::Drawn => "It's a draw!".to_string(),
    }
}

/// Renders the whole screen and returns the board geometry for hit-testing.
pub fn draw<S: ScoreStore>(frame: &mut Frame, app: &App<S>) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(CELL_HEIGHT * 3), // Board + sidebar
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(CELL_WIDTH * 3 + 2), Constraint::Length(34)])
        .split(chunks[2]);

    let layout = draw_board(frame, body[0], app.session().round(), app.input().cursor());

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(body[1]);
    draw_scoreboard(frame, sidebar[0], app.session().scores());
    draw_how_to_play(frame, sidebar[1]);

    draw_controls(frame, chunks[3], app.input());
    layout
}

fn draw_status<S: ScoreStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let round = app.session().round();
    let color = match round.status() {
        RoundStatus::InProgress => Color::Yellow,
        RoundStatus::Won { .. } => Color::Green,
        RoundStatus::Drawn => Color::Magenta,
    };

    let mut spans = vec![Span::styled(
        status_line(round),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = app.notice() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(notice.to_string(), Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, round: &Round, cursor: Position) -> BoardLayout {
    let layout = BoardLayout::new(area);
    let winning = round.winning_line();

    for pos in Position::ALL {
        let in_line = winning.is_some_and(|line| line.contains(pos));
        draw_cell(frame, layout.cell(pos), round.board().get(pos), pos, pos == cursor, in_line);
    }
    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, pos: Position, cursor: bool, winning: bool) {
    let (symbol, mut style) = match cell {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border = if cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Pad so the symbol lands on the middle row of the cell.
    let padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::raw(""); padding as usize];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, scores: &Scores) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let tiles = [
        ("Player X", scores.wins(Mark::X), Color::Blue),
        ("Draws", scores.draws(), Color::Yellow),
        ("Player O", scores.wins(Mark::O), Color::Red),
    ];
    for ((label, value, color), area) in tiles.into_iter().zip(cols.iter()) {
        let tile = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(tile, *area);
    }
}

fn draw_how_to_play(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::raw("Take turns placing X and O."),
        Line::raw("Three in a row wins."),
        Line::raw("A full board with no line is a draw."),
    ];
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("How to play"));
    frame.render_widget(help, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, input: &InputController) {
    let keys = input.keys();
    let text = format!(
        "1-9/click: Place | Arrows+Enter: Place | {}: New Round | {}: Undo | {}: Reset Scores | {}: Quit",
        keys.new_round(),
        keys.undo(),
        keys.reset_scores(),
        keys.quit()
    );
    let controls = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, area);
}
