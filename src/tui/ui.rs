//! Screen layout.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus, Hitboxes};
use super::{board, history};

/// Renders the game screen, returning the click targets it drew.
pub fn draw(frame: &mut Frame, app: &App) -> Hitboxes {
    let area = frame.area();
    let game = app.game();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(14),   // Board and history
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board::GRID_WIDTH + 4), Constraint::Min(30)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let cells = board::draw_board(frame, body[0], game.current_board(), game.status(), cursor);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let sort = history::draw_sort_selector(
        frame,
        info[0],
        game.sort_order(),
        app.focus() == Focus::Sort,
    );
    let highlighted = (app.focus() == Focus::History).then_some(app.highlighted_move());
    let moves = history::draw_move_list(
        frame,
        info[1],
        &game.moves(),
        highlighted,
        game.current_move(),
        game.sort_order(),
    );

    let help = Paragraph::new("←↑↓→ / 1-9 / click: Play | Tab: Focus | s: Sort | Enter: Select | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    Hitboxes { cells, sort, moves }
}
