//! Moves and the reasons a move can be turned away.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Mark, Position};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{} -> {}", mark, position)]
pub struct Move {
    /// Who played.
    pub mark: Mark,
    /// Where.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

/// Why a move was ignored. Rejected moves leave the round untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The round already has a result.
    #[display("Round is already over")]
    RoundOver,

    /// The cell is taken.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// Index outside 0-8.
    #[display("Index {} is off the board", _0)]
    OutOfBounds(usize),
}
