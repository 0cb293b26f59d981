//! Round state machine.
//!
//! A [`Round`] is one playthrough from an empty board to a result. It only
//! knows about the board; score keeping happens in [`Session`](crate::Session).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::{self, Outcome};
use crate::{Board, Cell, Line, Mark, Move, MoveRejection, Position};

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are being accepted.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board filled without a line.
    Drawn,
}

/// How undo picks the cell to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UndoPolicy {
    /// Take back the latest move in time and hand the turn back to its player.
    #[default]
    History,
    /// Clear the occupied cell with the highest index and flip the turn.
    ///
    /// This ignores move order, so it can clear the opponent's earlier move
    /// and leave the mark counts unbalanced.
    HighestIndex,
}

/// Result of [`Round::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Ignored; nothing changed.
    Rejected(MoveRejection),
    /// Placed; the round goes on with `next` to move.
    Continue {
        /// Mark now to move.
        next: Mark,
    },
    /// Placed and completed a line.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Placed and filled the board.
    Drawn,
}

impl MoveOutcome {
    /// True unless the move was rejected.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Board, player to move, status and move history for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    current_player: Mark,
    status: RoundStatus,
    history: Vec<Move>,
    undo_policy: UndoPolicy,
}

impl Round {
    /// Creates an empty round with X to move and the default undo policy.
    pub fn new() -> Self {
        Self::with_undo_policy(UndoPolicy::default())
    }

    /// Creates an empty round using the given undo policy.
    #[instrument]
    pub fn with_undo_policy(undo_policy: UndoPolicy) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: RoundStatus::InProgress,
            history: Vec::new(),
            undo_policy,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move. After the round ends this is the mark that
    /// made the final move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// The completed line, present only for a won round.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            RoundStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Moves played this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the undo policy.
    pub fn undo_policy(&self) -> UndoPolicy {
        self.undo_policy
    }

    /// Places the current player's mark at `index`.
    ///
    /// Moves after the round ended, onto an occupied cell or off the board
    /// are rejected without touching any state.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.is_over() {
            debug!("Move ignored, round over");
            return MoveOutcome::Rejected(MoveRejection::RoundOver);
        }
        let Some(pos) = Position::from_index(index) else {
            debug!("Move ignored, off the board");
            return MoveOutcome::Rejected(MoveRejection::OutOfBounds(index));
        };
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move ignored, cell occupied");
            return MoveOutcome::Rejected(MoveRejection::Occupied(pos));
        }

        let mark = self.current_player;
        self.board.set(pos, Cell::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        match rules::evaluate(&self.board) {
            Outcome::Win { mark: winner, line } => {
                debug!(%winner, ?line, "Round won");
                self.status = RoundStatus::Won { winner, line };
                MoveOutcome::Won { winner, line }
            }
            Outcome::Draw => {
                debug!("Round drawn");
                self.status = RoundStatus::Drawn;
                MoveOutcome::Drawn
            }
            Outcome::Ongoing => {
                self.current_player = mark.opponent();
                MoveOutcome::Continue {
                    next: self.current_player,
                }
            }
        }
    }

    /// Takes back one move while the round is in progress.
    ///
    /// Returns the cleared move, or `None` when the board is empty or the
    /// round has ended.
    #[instrument(skip(self), fields(policy = ?self.undo_policy))]
    pub fn undo_last_move(&mut self) -> Option<Move> {
        if self.is_over() {
            debug!("Undo ignored, round over");
            return None;
        }

        let undone = match self.undo_policy {
            UndoPolicy::History => {
                let last = self.history.pop()?;
                self.current_player = last.mark;
                last
            }
            UndoPolicy::HighestIndex => {
                let (position, mark) = self.board.occupied().next_back()?;
                self.history.retain(|m| m.position != position);
                self.current_player = self.current_player.opponent();
                Move::new(mark, position)
            }
        };

        self.board.set(undone.position, Cell::Empty);
        debug!(undone = %undone, "Move taken back");
        Some(undone)
    }

    /// Clears the board and hands the first move to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_undo_policy(self.undo_policy);
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
