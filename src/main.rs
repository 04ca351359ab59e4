//! Terminal 2048 runner (default binary).
//!
//! Owns the event loop and the key-to-action mapping. All game rules live in
//! `tui_2048::core`; this file only forwards actions and draws snapshots.
//!
//! Configuration comes from the environment (see `GameConfig::from_env`).
//! Set `TUI_2048_LOG_PATH` to capture tracing output, filtered by `RUST_LOG`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_2048::core::{GameConfig, GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let mut game = GameState::new(config).context("invalid game configuration")?;
    info!(
        cols = config.cols,
        rows = config.rows,
        seed = game.seed(),
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game));

    // Always try to restore terminal state.
    let _ = term.exit();

    info!(
        steps = game.steps(),
        max_tile = game.max_tile(),
        won = game.is_won(),
        lost = game.is_lost(),
        "exiting"
    );
    result
}

/// Route tracing output to `TUI_2048_LOG_PATH`; stdout belongs to the game screen.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("TUI_2048_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next event; the game only changes on input.
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                let changed = game.apply_action(action);
                debug!(action = action.as_str(), changed, steps = game.steps(), "input");
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
