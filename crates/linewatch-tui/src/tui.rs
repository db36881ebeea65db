//! Terminal initialization, restoration, and panic-safe cleanup.
//!
//! Wraps the crossterm + ratatui terminal lifecycle so the rest of the app
//! never has to think about raw mode or alternate screen. Two shapes are
//! supported: a full-screen alternate buffer for the monitor, and an inline
//! viewport for the keypad, which prints its output above itself.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand, cursor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal, TerminalOptions, Viewport,
    backend::CrosstermBackend,
    text::Line,
    widgets::{Paragraph, Widget},
};

pub type Backend = CrosstermBackend<Stdout>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Fullscreen,
    Inline,
}

/// Terminal wrapper that handles setup, teardown, and panic recovery.
pub struct Tui {
    pub terminal: Terminal<Backend>,
    mode: Mode,
    entered: bool,
}

impl Tui {
    /// Full-screen terminal (does NOT enter raw mode yet).
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            mode: Mode::Fullscreen,
            entered: false,
        })
    }

    /// Inline viewport of `height` rows anchored at the cursor.
    pub fn inline(height: u16) -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(Self {
            terminal,
            mode: Mode::Inline,
            entered: false,
        })
    }

    /// Enter TUI mode: raw mode, hidden cursor, and (full-screen only) the
    /// alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        if self.mode == Mode::Fullscreen {
            stdout().execute(EnterAlternateScreen)?;
        }
        stdout().execute(cursor::Hide)?;
        if self.mode == Mode::Fullscreen {
            self.terminal.clear()?;
        }
        self.entered = true;
        Ok(())
    }

    /// Exit TUI mode: restore terminal to its original state.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;

        // Best-effort restoration, partial failures are ignored
        if self.mode == Mode::Inline {
            let _ = self.terminal.clear();
        }
        let _ = stdout().execute(cursor::Show);
        if self.mode == Mode::Fullscreen {
            let _ = stdout().execute(LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        Ok(())
    }

    /// Draw a frame using the provided render closure.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Print one line of plain output above an inline viewport.
    pub fn print_above(&mut self, text: &str) -> Result<()> {
        let line = Line::from(text.to_owned());
        self.terminal.insert_before(1, |buf| {
            Paragraph::new(line).render(buf.area, buf);
        })?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Install panic and error hooks that restore the terminal before printing.
///
/// Must be called BEFORE entering the terminal, so panics during init
/// also get clean output.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();

    // color-eyre error report hook
    eyre_hook.install()?;

    // Panic hook: restore terminal, then print the panic
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restoration
        let _ = stdout().execute(cursor::Show);
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        // Now print the panic with full context
        panic_hook(info);
    }));

    Ok(())
}
