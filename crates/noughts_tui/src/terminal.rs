//! Terminal lifecycle and the event loop.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::ScoreStore;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

use crate::app::{App, Control};
use crate::view::{self, BoardLayout};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Raw mode, alternate screen and mouse capture for as long as it lives.
///
/// Dropping the guard hands the terminal back, including when the event
/// loop exits with an error or unwinds from a panic.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Takes over the terminal.
    #[instrument]
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                info!("Terminal acquired");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore();
                Err(e)
            }
        }
    }

    /// Terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
        info!("Terminal released");
    }
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Source of terminal events.
pub trait EventSource {
    /// Waits up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Replays a fixed list of events, then reports end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    /// Creates a script.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        self.events.pop_front().map(Some).ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
        })
    }
}

/// Draws and handles events until the user quits.
#[instrument(skip_all)]
pub fn run<B, S, E>(terminal: &mut Terminal<B>, app: &mut App<S>, events: &mut E) -> anyhow::Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: ScoreStore,
    E: EventSource,
{
    info!("Starting event loop");
    let mut layout = BoardLayout::default();

    loop {
        terminal.draw(|f| layout = view::draw(f, app))?;

        let Some(event) = events.next_event(POLL_INTERVAL)? else {
            continue;
        };
        debug!(?event, "Terminal event");

        if app.handle_event(&event, &layout) == Control::Quit {
            info!("Event loop finished");
            return Ok(());
        }
    }
}
