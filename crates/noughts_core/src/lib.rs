//! Noughts core - tic-tac-toe rules and session scores
//!
//! Pure game logic for a two-player, same-device tic-tac-toe session.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns any board into a win, draw or ongoing outcome
//! - **Round**: state machine for one playthrough, with undo
//! - **Scores**: cumulative wins and draws, persisted through a [`ScoreStore`]
//! - **Session**: ties a round to the scores and writes them through on change
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mark, MemoryStore, MoveOutcome, Session, UndoPolicy};
//!
//! let mut session = Session::new(MemoryStore::new(), UndoPolicy::History);
//! for idx in [0, 3, 1, 4] {
//!     session.apply_move(idx);
//! }
//! assert!(matches!(session.apply_move(2), MoveOutcome::Won { winner: Mark::X, .. }));
//! assert_eq!(session.scores().wins(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod line;
mod position;
mod round;
pub mod rules;
mod scores;
mod session;
mod store;
mod types;

pub use action::{Move, MoveRejection};
pub use line::Line;
pub use position::Position;
pub use round::{MoveOutcome, Round, RoundStatus, UndoPolicy};
pub use rules::{Outcome, evaluate};
pub use scores::Scores;
pub use session::Session;
pub use store::{
    FileStore, KeyValueStore, MemoryStore, SCORES_KEY, ScoreStore, StoreError, decode, encode,
};
pub use types::{Board, Cell, Mark, ParseBoardError};
