//! Keyboard and pointer input, mapped onto board actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_tictactoe::Position;

/// Where the board sits on screen, in terminal cells.
///
/// The renderer produces one of these each frame; pointer input is
/// hit-tested against the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Left edge of the board.
    pub x: u16,
    /// Top edge of the board.
    pub y: u16,
    /// Columns per cell.
    pub cell_width: u16,
    /// Rows per cell.
    pub cell_height: u16,
}

impl BoardGeometry {
    /// Centers a board of the given cell size inside `area`.
    pub fn centered(area: Rect, cell_width: u16, cell_height: u16) -> Self {
        let width = cell_width.saturating_mul(3);
        let height = cell_height.saturating_mul(3);
        Self {
            x: area.x.saturating_add(area.width.saturating_sub(width) / 2),
            y: area.y.saturating_add(area.height.saturating_sub(height) / 2),
            cell_width,
            cell_height,
        }
    }

    /// Whole board, in terminal cells.
    pub fn area(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.cell_width.saturating_mul(3),
            self.cell_height.saturating_mul(3),
        )
    }

    /// Screen rectangle of one board cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        // Both coordinates are below 3.
        let (row, col) = (pos.row() as u16, pos.col() as u16);
        Rect::new(
            self.x.saturating_add(col.saturating_mul(self.cell_width)),
            self.y.saturating_add(row.saturating_mul(self.cell_height)),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Board cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.x || row < self.y || self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        let col = (column - self.x) / self.cell_width;
        let row = (row - self.y) / self.cell_height;
        Position::from_coords(row as usize, col as usize)
    }
}

/// A pointer sample in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    /// Terminal column.
    pub column: u16,
    /// Terminal row.
    pub row: u16,
    /// True for a primary-button press, false for a hover.
    pub pressed: bool,
}

impl Pointer {
    /// Reads a mouse event. Only left presses, moves and drags count.
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        let pressed = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => true,
            MouseEventKind::Moved | MouseEventKind::Drag(_) => false,
            _ => return None,
        };
        Some(Self {
            column: event.column,
            row: event.row,
            pressed,
        })
    }
}

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the next mark at a cell.
    Place(Position),
    /// Place the next mark under the cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(KeyCode),
    /// Pointer moved over a cell, or off the board.
    Hover(Option<Position>),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

impl Action {
    /// Maps a key press. Releases and repeats are ignored.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                Position::from_label_or_number(c.encode_utf8(&mut [0; 4])).map(Action::Place)
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Action::MoveCursor(key.code))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    /// Maps a pointer sample against the board's geometry.
    ///
    /// Presses off the board do nothing; hovers off the board clear the
    /// preview.
    pub fn from_pointer(pointer: Pointer, geometry: &BoardGeometry) -> Option<Self> {
        let cell = geometry.cell_at(pointer.column, pointer.row);
        if pointer.pressed {
            cell.map(Action::Place)
        } else {
            Some(Action::Hover(cell))
        }
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
