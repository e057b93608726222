//! Terminal UI for the game.
//!
//! The UI is a thin adapter: it forwards key presses to the engine as
//! discrete inputs and renders the view model that the engine's event
//! stream builds up. The computer's delayed move is scheduled here as a
//! spawned sleep that sends the engine's round token back through a
//! channel; the engine decides whether the token is still current.

mod app;
mod input;
mod ui;

use crate::game::{ComputerTurn, GameEngine};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::Action;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{error, info};

/// Runs the game until the user quits.
///
/// `delay` is how long the computer pretends to think before moving.
pub async fn run(vs_computer: bool, delay: Duration, log_file: &Path) -> Result<()> {
    // Log to a file so tracing output doesn't fight the TUI for the
    // terminal.
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(vs_computer, ?delay, "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, vs_computer, delay).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// The single-threaded input/render loop.
///
/// All engine mutation happens here, one input at a time: key presses and
/// fired move timers are both drained on this loop, so there is never more
/// than one logical mutation in flight.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    vs_computer: bool,
    delay: Duration,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel::<ComputerTurn>();

    let mut engine = GameEngine::new(vs_computer, event_tx);
    let mut app = App::new(vs_computer);

    loop {
        // Fired move timers first; the engine drops stale tokens.
        while let Ok(turn) = timer_rx.try_recv() {
            engine.computer_move(turn);
        }

        // Apply engine notifications to the view model.
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = input::action_for(key.code) else {
            continue;
        };

        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Click(index) => {
                if let Some(turn) = engine.handle_cell_click(index) {
                    schedule_computer_move(timer_tx.clone(), turn, delay);
                }
            }
            Action::ResetGame => engine.reset_game(),
            Action::ResetScores => engine.reset_scores(),
            Action::ToggleMode => {
                engine.toggle_mode();
                app.set_vs_computer(engine.vs_computer());
            }
        }
    }
}

/// Fire-and-forget delayed move: sleep, then hand the token back to the
/// loop. No cancellation; the round id inside the token makes a stale
/// delivery harmless.
fn schedule_computer_move(
    timer_tx: mpsc::UnboundedSender<ComputerTurn>,
    turn: ComputerTurn,
    delay: Duration,
) {
    tokio::spawn(async move {
        sleep(delay).await;
        let _ = timer_tx.send(turn);
    });
}
