//! Keyboard and mouse mapping.
//!
//! [`InputController`] turns terminal events into [`Action`]s and owns the
//! board cursor. Keys that are not bound produce no action, so nothing
//! else is intercepted.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use noughts_core::Position;
use tracing::{debug, instrument};

use crate::KeyBindings;
use crate::view::BoardLayout;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark a specific cell.
    Place(Position),
    /// Mark the cell under the cursor.
    PlaceAtCursor,
    /// Move the cursor one cell.
    MoveCursor(CursorMove),
    /// Clear the board, keep scores.
    NewRound,
    /// Zero the scores and clear the board.
    ResetScores,
    /// Take back a move.
    Undo,
    /// Leave the application.
    Quit,
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Moves the cursor, stopping at the board edges.
pub fn move_cursor(cursor: Position, dir: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match dir {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps terminal input to actions.
#[derive(Debug, Clone)]
pub struct InputController {
    keys: KeyBindings,
    cursor: Position,
}

impl InputController {
    /// Creates a controller with the cursor on the center cell.
    pub fn new(keys: KeyBindings) -> Self {
        Self {
            keys,
            cursor: Position::Center,
        }
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Active shortcut letters.
    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    /// Maps a key press. Releases, unbound keys and Ctrl/Alt chords other
    /// than Ctrl-C give `None`.
    #[instrument(skip(self))]
    pub fn map_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    Some(Action::Quit)
                }
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(CursorMove::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(CursorMove::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(CursorMove::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(CursorMove::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c) if c.is_ascii_digit() => Position::from_digit(c).map(Action::Place),
            KeyCode::Char(c) => self.map_shortcut(c),
            _ => None,
        };
        debug!(?action, "Key mapped");
        action
    }

    fn map_shortcut(&self, c: char) -> Option<Action> {
        let c = c.to_ascii_lowercase();
        let is = |bound: &char| bound.to_ascii_lowercase() == c;

        if is(self.keys.new_round()) {
            Some(Action::NewRound)
        } else if is(self.keys.reset_scores()) {
            Some(Action::ResetScores)
        } else if is(self.keys.undo()) {
            Some(Action::Undo)
        } else if is(self.keys.quit()) {
            Some(Action::Quit)
        } else {
            None
        }
    }

    /// Maps a left click on a board cell to a placement.
    #[instrument(skip(self, layout))]
    pub fn map_mouse(&self, mouse: MouseEvent, layout: &BoardLayout) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => layout
                .position_at(mouse.column, mouse.row)
                .map(Action::Place),
            _ => None,
        }
    }

    /// Applies cursor movement locally. Returns the action with
    /// `PlaceAtCursor` resolved to a concrete cell, or `None` if the action
    /// only moved the cursor.
    #[instrument(skip(self))]
    pub fn resolve(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::MoveCursor(dir) => {
                self.cursor = move_cursor(self.cursor, dir);
                None
            }
            Action::PlaceAtCursor => Some(Action::Place(self.cursor)),
            Action::Place(pos) => {
                self.cursor = pos;
                Some(action)
            }
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, CursorMove::Down), Position::BottomCenter);
        assert_eq!(
            move_cursor(Position::BottomRight, CursorMove::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_digits_place() {
        let input = InputController::new(KeyBindings::default());
        assert_eq!(
            input.map_key(press(KeyCode::Char('1'))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(input.map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_shortcuts_ignore_case() {
        let input = InputController::new(KeyBindings::default());
        assert_eq!(input.map_key(press(KeyCode::Char('r'))), Some(Action::NewRound));
        let shifted = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(input.map_key(shifted), Some(Action::ResetScores));
        assert_eq!(input.map_key(press(KeyCode::Char('u'))), Some(Action::Undo));
    }

    #[test]
    fn test_unbound_and_chorded_keys_ignored() {
        let input = InputController::new(KeyBindings::default());
        assert_eq!(input.map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(input.map_key(press(KeyCode::Tab)), None);
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(input.map_key(ctrl_r), None);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.map_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let input = InputController::new(KeyBindings::default());
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(input.map_key(key), None);
    }

    #[test]
    fn test_resolve_place_at_cursor() {
        let mut input = InputController::new(KeyBindings::default());
        assert_eq!(input.resolve(Action::MoveCursor(CursorMove::Up)), None);
        assert_eq!(input.cursor(), Position::TopCenter);
        assert_eq!(
            input.resolve(Action::PlaceAtCursor),
            Some(Action::Place(Position::TopCenter))
        );
        assert_eq!(
            input.resolve(Action::Place(Position::BottomLeft)),
            Some(Action::Place(Position::BottomLeft))
        );
        assert_eq!(input.cursor(), Position::BottomLeft);
    }
}
