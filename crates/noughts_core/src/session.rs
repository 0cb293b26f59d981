//! A play session: the current round plus persisted scores.

use tracing::{info, instrument};

use crate::{Move, MoveOutcome, Round, ScoreStore, Scores, UndoPolicy};

/// Owns the current [`Round`], the session [`Scores`] and their store.
///
/// Scores are loaded once on construction and written through to the store
/// whenever a round finishes.
#[derive(Debug)]
pub struct Session<S> {
    round: Round,
    scores: Scores,
    store: S,
}

impl<S: ScoreStore> Session<S> {
    /// Starts a session, loading scores from `store`.
    #[instrument(skip(store))]
    pub fn new(store: S, undo_policy: UndoPolicy) -> Self {
        let scores = store.load();
        info!(%scores, "Session started");
        Self {
            round: Round::with_undo_policy(undo_policy),
            scores,
            store,
        }
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the session scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plays the current player's mark at `index`, crediting the score if
    /// the move ends the round.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.round.apply_move(index);
        match outcome {
            MoveOutcome::Won { winner, .. } => {
                self.scores.record_win(winner);
                info!(%winner, scores = %self.scores, "Round won");
                self.store.save(&self.scores);
            }
            MoveOutcome::Drawn => {
                self.scores.record_draw();
                info!(scores = %self.scores, "Round drawn");
                self.store.save(&self.scores);
            }
            MoveOutcome::Continue { .. } | MoveOutcome::Rejected(_) => {}
        }
        outcome
    }

    /// Takes back a move in the running round.
    #[instrument(skip(self))]
    pub fn undo_last_move(&mut self) -> Option<Move> {
        self.round.undo_last_move()
    }

    /// Starts a fresh round, keeping scores.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.round.reset();
    }

    /// Zeroes scores, removes them from storage and starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
        self.store.clear();
        self.round.reset();
        info!("Scores reset");
    }
}
