//! Terminal UI for the game.

mod app;
mod input;
mod terminal;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

pub use app::{App, Focus};
pub use input::move_cursor;
pub use ui::{HitMap, draw};

use crate::{GameController, TuiConfig};
use terminal::TerminalGuard;

/// Runs the game in the current terminal until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let controller = GameController::with_sort(*config.initial_sort());
    let mut app = App::new(controller, config.highlight_color()?);

    let guard = TerminalGuard::enter(io::stdout())?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, &mut app));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, waits for one input event, dispatches it, and repeats.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let mut hit_map = HitMap::default();
        terminal.draw(|f| hit_map = ui::draw(f, &*app))?;
        app.set_hit_map(hit_map);

        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}
