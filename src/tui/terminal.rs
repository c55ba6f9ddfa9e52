//! Raw-mode terminal setup that is undone on drop.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard puts the terminal back in cooked mode on the main
/// screen, including when setup fails partway through.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen with
    /// mouse capture.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on the guard owns cleanup, so a failed switch still
        // restores cooked mode.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        debug!("Terminal restored");
    }
}
