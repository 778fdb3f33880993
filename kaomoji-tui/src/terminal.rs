//! Terminal session
//!
//! The browser draws on the alternate screen in raw mode with the cursor
//! hidden. [`TerminalSession`] puts the terminal back on every exit path:
//! an explicit [`TerminalSession::restore`], drop, or a panic (through
//! [`install_panic_hook`]).

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Leave the alternate screen and show the cursor
fn write_leave_sequence(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

fn leave(out: &mut impl Write) -> io::Result<()> {
    // Raw mode goes first so a failed write still leaves a usable shell
    let raw = disable_raw_mode();
    write_leave_sequence(out)?;
    raw
}

/// Owns the terminal while the browser runs
pub struct TerminalSession {
    terminal: Tui,
    active: bool,
}

impl TerminalSession {
    /// Switch to raw mode and the alternate screen
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = leave(&mut stdout);
            return Err(e.into());
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        tracing::debug!("Entered terminal session");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Hand the terminal back to the shell, reporting failures
    pub fn restore(mut self) -> Result<()> {
        self.leave_once()
    }

    fn leave_once(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        leave(self.terminal.backend_mut())?;
        tracing::debug!("Left terminal session");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.leave_once() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Restore the terminal before the panic message is printed
///
/// The panic is also logged, since the log file is the only place output
/// survives while the alternate screen is up.
pub fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave(&mut io::stdout());
        tracing::error!("kaomoji-tui panicked: {}", panic_info);

        previous_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_sequence_restores_screen_and_cursor() {
        let mut out = Vec::new();
        write_leave_sequence(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }

    #[test]
    fn test_leave_without_raw_mode_is_harmless() {
        let mut out = Vec::new();
        leave(&mut out).unwrap();
        assert!(!out.is_empty());
    }
}
