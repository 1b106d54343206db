//! Board and cell widgets.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::{Board, Player, Position, Square, Status, attempt_move};

/// Width of one cell in terminal columns.
const CELL_WIDTH: u16 = 11;
/// Height of one cell in terminal rows.
const CELL_HEIGHT: u16 = 3;
/// Size of the whole grid including separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid including separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Validates a cell selection against the displayed board.
///
/// Returns the next board to report upward, or `None` when the selection
/// is ignored.
#[instrument(skip(board))]
pub fn select(board: &Board, pos: Position, next: Player) -> Option<Board> {
    match attempt_move(board, pos, next) {
        Ok(board) => Some(board),
        Err(e) => {
            debug!(error = %e, "Ignoring cell selection");
            None
        }
    }
}

/// Draws the status line and the grid, returning the area of each cell.
///
/// `cursor` is highlighted when given.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    status: Status,
    cursor: Option<Position>,
) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(GRID_HEIGHT)])
        .split(area);

    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_line = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_line, chunks[0]);

    let grid = center_rect(chunks[1], GRID_WIDTH, GRID_HEIGHT);
    let separator = Style::default().fg(Color::DarkGray);
    let mut cells = [Rect::default(); 9];

    for row in 0..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1);
        if row > 0 {
            let line = Rect::new(grid.x, y - 1, GRID_WIDTH, 1).intersection(grid);
            frame.render_widget(
                Paragraph::new("─".repeat(GRID_WIDTH as usize)).style(separator),
                line,
            );
        }
        for col in 0..3u16 {
            let x = grid.x + col * (CELL_WIDTH + 1);
            if col > 0 {
                let bar = Rect::new(x - 1, y, 1, CELL_HEIGHT).intersection(grid);
                frame.render_widget(Paragraph::new(vec![Line::raw("│"); 3]).style(separator), bar);
            }
            let Some(pos) = Position::from_row_col(row as usize, col as usize) else {
                continue;
            };
            let cell = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid);
            draw_cell(frame, cell, board.get(pos), cursor == Some(pos));
            cells[pos.to_index()] = cell;
        }
    }
    cells
}

/// Draws one square of the board.
pub fn draw_cell(frame: &mut Frame, area: Rect, square: Square, highlighted: bool) {
    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(format!(" {} ", square.symbol()), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Returns the cell whose area contains the given terminal coordinate.
pub fn hit_cell(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    let point = ratatui::layout::Position::new(column, row);
    cells
        .iter()
        .position(|cell| cell.contains(point))
        .and_then(Position::from_index)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
