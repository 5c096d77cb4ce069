//! Full-screen RAII guard.

use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::exits;

/// Raw mode plus alternate screen with a hidden cursor, all undone on drop.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        exits::set_screen_active(true);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            exits::set_screen_active(false);
            return Err(e);
        }
        Ok(Self { active: true })
    }

    /// Restore the terminal now (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            exits::set_screen_active(false);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
