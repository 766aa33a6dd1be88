//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Deadlines from the runtime are
//! awaited with tokio timers alongside the event stream.

use std::{
    io::{self, Stdout, stdout},
    time::Instant,
};

use crossterm::{
    ExecutableCommand,
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dexquiz_app::{App, AppEvent, Driver, KeyInput};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Enters raw mode and the alternate screen on creation and restores the
/// terminal when dropped.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    ///
    /// If setup fails after raw mode is on, the terminal is restored before
    /// the error is returned.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let guard = RestoreGuard::new(restore_terminal);

        stdout().execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        guard.disarm();
        Ok(Self { terminal, event_stream })
    }

    /// Convert a crossterm event to an [`AppEvent`].
    ///
    /// Key releases and repeats, mouse and focus events are dropped.
    fn convert_event(event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key).map(AppEvent::Key)
            },
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }

    /// Convert a crossterm `KeyEvent` to `KeyInput`. Ctrl-C maps to `Esc`.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(KeyInput::Esc),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::PageUp => Some(KeyInput::PageUp),
            KeyCode::PageDown => Some(KeyInput::PageDown),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(
        &mut self,
        deadline: Option<Instant>,
    ) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            let sleep = async {
                match deadline {
                    Some(deadline) => {
                        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                    },
                    None => std::future::pending::<()>().await,
                }
            };

            let maybe_event = tokio::select! {
                biased;

                // Terminal events
                maybe_event = self.event_stream.next() => maybe_event,

                // Next scheduled tick or wake
                () = sleep => return Ok(None),
            };

            match maybe_event {
                Some(Ok(event)) => {
                    if let Some(event) = Self::convert_event(event) {
                        return Ok(Some(event));
                    }
                },
                Some(Err(e)) => return Err(TerminalError::Io(e)),
                None => {
                    tracing::warn!("terminal event stream ended");
                    return Ok(Some(AppEvent::InputClosed));
                },
            }
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn terminal_size(&self) -> Option<(u16, u16)> {
        crossterm::terminal::size().ok()
    }

    fn render(&mut self, app: &App<Instant>) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        tracing::debug!("terminal driver stopped");
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leave raw mode and the alternate screen, show the cursor. Best effort.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().execute(Show);
}

/// Runs `restore` on drop unless disarmed.
///
/// Covers the window in [`TerminalDriver::new`] where raw mode is on but no
/// driver exists yet to restore it.
struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore: Some(restore) }
    }

    fn disarm(mut self) {
        self.restore = None;
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = &mut self.restore {
            restore();
        }
    }
}
