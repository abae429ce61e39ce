//! Terminal setup for the analysis screen
//!
//! The screen runs in raw mode on the alternate screen. Whatever ends the
//! session (normal exit, an error bubbling out of the event loop, or a panic
//! in the UI thread) hands the terminal back in its original state.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::sync::Once;
use tracing::error;

static INSTALL_PANIC_HOOK: Once = Once::new();

/// Raw mode and alternate screen for the lifetime of the guard.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        install_panic_hook();

        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves the alternate screen, shows the cursor and turns raw mode off.
/// Safe to call more than once.
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

/// Restores the terminal before the default hook prints the panic, so the
/// message lands on the normal screen and the log keeps a copy.
fn install_panic_hook() {
    INSTALL_PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            error!("UI panicked: {}", info);
            previous(info);
        }));
    });
}
