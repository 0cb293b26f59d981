//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Position;

/// One of the two player symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// First player, always opens the round.
    #[display("X")]
    X,
    /// Second player.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if no mark is present.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// 3x3 board stored in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells. Any combination is accepted, including
    /// boards no legal game could reach.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrites the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True when no cell holds a mark.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Occupied positions in ascending index order.
    pub fn occupied(&self) -> impl DoubleEndedIterator<Item = (Position, Mark)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).mark().map(|mark| (pos, mark)))
    }
}

impl std::fmt::Display for Board {
    /// Renders rows separated by `-+-+-`, empty cells show their 1-9 digit.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Failure to parse a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board {:?}: {}", input, reason)]
pub struct ParseBoardError {
    /// Text that was rejected.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells written as `X`, `O` or `.`/`_`/`-` for empty.
    /// Whitespace and `/` are ignored, so `"XOX/XOO/OXX"` is accepted.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseBoardError {
            input: s.to_string(),
            reason,
        };

        let mut cells = [Cell::Empty; 9];
        let mut filled = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            if filled == 9 {
                return Err(err("more than nine cells"));
            }
            cells[filled] = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                _ => return Err(err("unexpected character")),
            };
            filled += 1;
        }

        if filled != 9 {
            return Err(err("fewer than nine cells"));
        }
        Ok(Self { cells })
    }
}
