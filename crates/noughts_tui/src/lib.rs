//! Terminal UI for Noughts
//!
//! Renders a [`noughts_core::Session`] with ratatui and drives it from
//! keyboard and mouse input. Scores persist to a directory through
//! [`noughts_core::FileStore`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
mod view;

pub use app::{App, Control};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, KeyBindings};
pub use input::{Action, CursorMove, InputController, move_cursor};
pub use logging::init_tracing;
pub use terminal::{CrosstermEvents, EventSource, ScriptedEvents, TerminalSession, run};
pub use view::{BoardLayout, CELL_HEIGHT, CELL_WIDTH, draw, status_line};
