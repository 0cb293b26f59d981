//! Application state and logic.

use crossterm::event::Event;
use noughts_core::{MoveOutcome, MoveRejection, ScoreStore, Session};
use tracing::{debug, info, instrument};

use crate::input::{Action, InputController};
use crate::view::BoardLayout;

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App<S> {
    session: Session<S>,
    input: InputController,
    notice: Option<String>,
}

impl<S: ScoreStore> App<S> {
    /// Creates an application around a session.
    pub fn new(session: Session<S>, input: InputController) -> Self {
        Self {
            session,
            input,
            notice: None,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Gets the input controller.
    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// One-line feedback about the last action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles one terminal event. `layout` is the board geometry from the
    /// last draw, used for mouse hit-testing.
    #[instrument(skip(self, layout))]
    pub fn handle_event(&mut self, event: &Event, layout: &BoardLayout) -> Control {
        let action = match event {
            Event::Key(key) => self.input.map_key(*key),
            Event::Mouse(mouse) => self.input.map_mouse(*mouse, layout),
            _ => None,
        };
        match action {
            Some(action) => self.dispatch(action),
            None => Control::Continue,
        }
    }

    /// Applies an action to the session.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Control {
        let Some(action) = self.input.resolve(action) else {
            return Control::Continue;
        };

        self.notice = None;
        match action {
            Action::Place(pos) => match self.session.apply_move(pos.to_index()) {
                MoveOutcome::Rejected(MoveRejection::RoundOver) => {
                    self.notice = Some(format!(
                        "Round is over. Press '{}' for a new round.",
                        self.input.keys().new_round()
                    ));
                }
                MoveOutcome::Rejected(reason) => {
                    self.notice = Some(reason.to_string());
                }
                outcome => debug!(?outcome, "Move applied"),
            },
            Action::Undo => match self.session.undo_last_move() {
                Some(undone) => debug!(%undone, "Undo applied"),
                None if self.session.round().is_over() => {
                    self.notice = Some("Undo is not available once the round is over.".to_string());
                }
                None => {
                    self.notice = Some("No moves to undo.".to_string());
                }
            },
            Action::NewRound => {
                info!("New round");
                self.session.reset_round();
            }
            Action::ResetScores => {
                info!("Resetting scores");
                self.session.reset_scores();
                self.notice = Some("Scores reset.".to_string());
            }
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
            Action::PlaceAtCursor | Action::MoveCursor(_) => {}
        }
        Control::Continue
    }
}
