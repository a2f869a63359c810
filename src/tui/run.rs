//! TUI entry point and terminal setup.

use std::io;

use crossterm::{
    cursor::{SetCursorStyle, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::tui::{app::App, focus::WrapPolicy, task_form::TaskForm};

/// Initialise the terminal, run the form to completion and restore the
/// terminal. Returns the finished form.
///
/// The terminal is restored on every exit path, including setup errors and
/// panics in the event loop.
pub fn run_form_tui(policy: WrapPolicy) -> io::Result<TaskForm> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);

    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(policy);
    let result = app.run(&mut terminal);

    guard.finish()?;
    result?;
    Ok(app.into_form())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        SetCursorStyle::DefaultUserShape,
        Show
    )
}

/// Runs `restore` exactly once: through `finish` on the normal path, or on
/// drop when an error or panic unwinds past it.
struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore: Some(restore) }
    }

    fn finish(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            // Already unwinding; nothing useful to do with a second error.
            let _ = restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    fn counting(calls: &Cell<u32>) -> TerminalGuard<impl FnMut() -> io::Result<()> + '_> {
        TerminalGuard::new(move || {
            calls.set(calls.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn test_guard_restores_once_on_finish() {
        let calls = Cell::new(0);
        counting(&calls).finish().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_early_error() {
        let calls = Cell::new(0);
        let setup = || -> io::Result<()> {
            let _guard = counting(&calls);
            Err(io::Error::other("terminal setup failed"))
        };
        assert!(setup().is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let calls = Cell::new(0);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = counting(&calls);
            panic!("event loop panicked");
        }));
        assert!(outcome.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_finish_reports_restore_error() {
        let guard = TerminalGuard::new(|| Err(io::Error::other("tty gone")));
        assert!(guard.finish().is_err());
    }
}
