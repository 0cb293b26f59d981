//! Noughts - two-player tic-tac-toe in the terminal

use anyhow::{Context, Result};
use clap::Parser;
use noughts_core::{FileStore, ScoreStore, Session};
use noughts_tui::{
    App, AppConfig, Cli, Command, CrosstermEvents, InputController, TerminalSession, init_tracing,
    run,
};
use tracing::{error, info};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(dir) = cli.scores_dir {
        config = config.with_scores_dir(dir);
    }

    init_tracing(&config)?;
    info!(command = ?cli.command, "Starting noughts");

    let mut store = FileStore::new(config.scores_dir());

    match cli.command.unwrap_or_default() {
        Command::Play => {
            let session = Session::new(store, *config.undo());
            let mut app = App::new(session, InputController::new(*config.keys()));

            let mut guard = TerminalSession::acquire().context("Failed to set up terminal")?;
            let res = run(guard.terminal_mut(), &mut app, &mut CrosstermEvents);
            drop(guard);

            if let Err(e) = &res {
                error!(error = %e, "Event loop failed");
            }
            res?;
            println!("Final scores  {}", app.session().scores());
        }
        Command::Scores => {
            println!("{}", store.load());
        }
        Command::ResetScores => {
            store.clear();
            println!("Scores reset.");
        }
    }

    info!("Shutting down");
    Ok(())
}
