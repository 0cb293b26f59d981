//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They hold no state and accept every
//! one of the 3^9 cell combinations, reachable or not.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Line, Mark};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Win {
        /// Owner of the line.
        mark: Mark,
        /// First completed line in priority order.
        line: Line,
    },
    /// Board full, nobody aligned three.
    Draw,
    /// Moves remain.
    Ongoing,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Evaluates a board: win first, then draw, otherwise ongoing.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_evaluate_full_board_win_beats_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Mark::X,
                line: Line::MainDiagonal
            }
        );
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert!(evaluate(&board).is_terminal());
    }
}
