//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Line, Mark};
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`Line::ALL`] order, so on boards with several
/// completed lines (only reachable by editing the board directly) the
/// earliest one is reported.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Returns the winning mark, if any.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
