//! Terminal UI for rewind: tic-tac-toe with time travel.
//!
//! The game rules and history live in [`rewind_tictactoe`]; this crate
//! mounts a [`GameController`](rewind_tictactoe::GameController) in the
//! terminal, turns clicks and keys into actions and draws each frame
//! from the latest state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod effects;
pub mod targets;
pub mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info, instrument};

/// Poll interval when nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Runs the game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all, fields(tick_rate_ms = config.tick_rate_ms()))]
pub async fn run(config: TuiConfig) -> Result<()> {
    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &TuiConfig,
) -> Result<()> {
    let mut app = App::new(*config.animation(), Instant::now());
    let mut ticker = interval(config.tick_rate());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        app.tick(Instant::now());
        terminal.draw(|f| app.draw(f))?;

        if app.should_quit() {
            return Ok(());
        }

        if app.is_animating() {
            // Keep frames coming while effects run.
            ticker.tick().await;
            while event::poll(Duration::ZERO)? {
                app.handle_event(event::read()?, Instant::now());
            }
        } else if event::poll(IDLE_POLL)? {
            app.handle_event(event::read()?, Instant::now());
        }
    }
}
