//! Application state and event handling.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use tracing::{debug, info, instrument, warn};

use super::{board, history, input, ui};
use crate::{Game, Position, SortOrder};

/// Pane receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The ascending/descending selector.
    Sort,
    /// The move list.
    History,
}

impl Focus {
    /// Next pane in tab order.
    pub fn next(self) -> Self {
        match self {
            Self::Board => Self::Sort,
            Self::Sort => Self::History,
            Self::History => Self::Board,
        }
    }

    /// Previous pane in tab order.
    pub fn previous(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::Sort => Self::Board,
            Self::History => Self::Sort,
        }
    }
}

/// Input translated into something the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A cell was activated.
    SelectCell(Position),
    /// A move-list button was activated.
    JumpTo(usize),
    /// A sort option was chosen.
    SetSortOrder(SortOrder),
    /// Flip the sort order.
    ToggleSort,
    /// Move the board cursor.
    MoveCursor(Position),
    /// Highlight a move-list entry by move number.
    HighlightMove(usize),
    /// Change keyboard focus.
    Focus(Focus),
    /// Leave the application.
    Quit,
}

/// Screen areas from the last draw, used to route mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    /// Area of each board cell, indexed by position.
    pub cells: [Rect; 9],
    /// Area of each sort option.
    pub sort: Vec<(SortOrder, Rect)>,
    /// Area of each visible move-list entry with its move number.
    pub moves: Vec<(usize, Rect)>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    focus: Focus,
    cursor: Position,
    highlighted_move: usize,
    hitboxes: Hitboxes,
    running: bool,
}

impl App {
    /// Creates an application around `game`.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        let highlighted_move = game.current_move();
        Self {
            game,
            focus: Focus::default(),
            cursor: Position::Center,
            highlighted_move,
            hitboxes: Hitboxes::default(),
            running: true,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move number under the move-list highlight.
    pub fn highlighted_move(&self) -> usize {
        self.highlighted_move
    }

    /// Areas recorded by the last draw.
    pub fn hitboxes(&self) -> &Hitboxes {
        &self.hitboxes
    }

    /// Whether the event loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip_all)]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            let event = event::read()?;
            if let Some(message) = self.handle_event(&event) {
                self.update(message);
            }
        }
        info!(moves = self.game.history().len() - 1, "Event loop finished");
        Ok(())
    }

    /// Renders the whole screen and records click targets.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.hitboxes = ui::draw(frame, self);
    }

    /// Translates a terminal event into a message.
    pub fn handle_event(&self, event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => None,
        }
    }

    /// Translates a key press into a message.
    #[instrument(skip(self))]
    pub fn handle_key(&self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Message::Quit),
            KeyCode::Tab => return Some(Message::Focus(self.focus.next())),
            KeyCode::BackTab => return Some(Message::Focus(self.focus.previous())),
            KeyCode::Char('s') | KeyCode::Char('S') => return Some(Message::ToggleSort),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                return input::digit_position(c).map(Message::SelectCell);
            }
            _ => {}
        }

        match self.focus {
            Focus::Board => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SelectCell(self.cursor)),
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                    Some(Message::MoveCursor(input::move_cursor(self.cursor, code)))
                }
                _ => None,
            },
            Focus::Sort => match key.code {
                KeyCode::Left => Some(Message::SetSortOrder(SortOrder::Ascending)),
                KeyCode::Right => Some(Message::SetSortOrder(SortOrder::Descending)),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleSort),
                _ => None,
            },
            Focus::History => {
                let entries = self.game.moves();
                let index = entries
                    .iter()
                    .position(|e| e.number == self.highlighted_move)
                    .unwrap_or(0);
                match key.code {
                    KeyCode::Up => index
                        .checked_sub(1)
                        .and_then(|i| entries.get(i))
                        .map(|e| Message::HighlightMove(e.number)),
                    KeyCode::Down => entries.get(index + 1).map(|e| Message::HighlightMove(e.number)),
                    KeyCode::Enter | KeyCode::Char(' ') => entries
                        .get(index)
                        .filter(|e| e.is_button())
                        .map(|e| Message::JumpTo(e.number)),
                    _ => None,
                }
            }
        }
    }

    /// Translates a left click into a message using the last draw's areas.
    #[instrument(skip(self))]
    pub fn handle_mouse(&self, mouse: MouseEvent) -> Option<Message> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let (column, row) = (mouse.column, mouse.row);

        if let Some(pos) = board::hit_cell(&self.hitboxes.cells, column, row) {
            return Some(Message::SelectCell(pos));
        }
        if let Some(order) = history::hit(&self.hitboxes.sort, column, row) {
            return Some(Message::SetSortOrder(order));
        }
        history::hit(&self.hitboxes.moves, column, row)
            .filter(|&n| n != self.game.current_move())
            .map(Message::JumpTo)
    }

    /// Applies a message to the application state.
    #[instrument(skip(self))]
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SelectCell(pos) => {
                self.cursor = pos;
                let next = self.game.next_player();
                if let Some(board) = board::select(self.game.current_board(), pos, next) {
                    self.game.submit_move(board);
                    self.highlighted_move = self.game.current_move();
                }
            }
            Message::JumpTo(move_number) => match self.game.jump_to(move_number) {
                Ok(()) => self.highlighted_move = move_number,
                Err(e) => warn!(error = %e, "Ignoring jump"),
            },
            Message::SetSortOrder(order) => self.game.set_sort_order(order),
            Message::ToggleSort => self.game.toggle_sort(),
            Message::MoveCursor(pos) => self.cursor = pos,
            Message::HighlightMove(move_number) => self.highlighted_move = move_number,
            Message::Focus(focus) => {
                debug!(?focus, "Focus changed");
                self.focus = focus;
            }
            Message::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }
}
