//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod complete;
mod feedback;
mod grid;
mod header;
mod input;

use dexquiz_app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the entire UI.
///
/// Shows the completion screen once every entry is revealed, otherwise the
/// header, grid, feedback line and guess prompt from top to bottom.
pub fn render<I>(frame: &mut Frame, app: &App<I>) {
    const HEADER_HEIGHT: u16 = 1;
    const GRID_MIN_HEIGHT: u16 = 1;
    const FEEDBACK_HEIGHT: u16 = 1;
    const INPUT_HEIGHT: u16 = 3;

    let area = frame.area();
    if app.is_complete() {
        complete::render(frame, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(FEEDBACK_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    let [header_area, grid_area, feedback_area, input_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, app, *header_area);
    grid::render(frame, app, *grid_area);
    feedback::render(frame, app, *feedback_area);
    input::render(frame, app, *input_area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use dexquiz_app::{App, AppEvent, GameConfig, KeyInput};
    use dexquiz_core::{Entry, Roster};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    /// Two-entry roster that is quick to complete.
    pub fn tiny_roster() -> Roster {
        let entries = vec![Entry::new(1, "Bulbasaur"), Entry::new(2, "Ivysaur")];
        Roster::new(entries).unwrap_or_else(|e| panic!("invalid test roster: {e}"))
    }

    /// Started app sized to `width` x `height`.
    pub fn app(roster: Roster, width: u16, height: u16) -> App<Duration> {
        let mut app = App::new(roster, GameConfig::default());
        let _ = app.handle(AppEvent::Resize(width, height), Duration::ZERO);
        let _ = app.start(Duration::ZERO);
        let _ = app.refresh_layout();
        app
    }

    /// Type `text` and press Enter at `now`.
    pub fn guess(app: &mut App<Duration>, text: &str, now: Duration) {
        for c in text.chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)), now);
        }
        let _ = app.handle(AppEvent::Key(KeyInput::Enter), now);
        let _ = app.handle(AppEvent::Wake, now);
    }

    /// Draw `app` into a fresh `width` x `height` test terminal.
    pub fn draw(app: &App<Duration>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        terminal
            .draw(|frame| super::render(frame, app))
            .unwrap_or_else(|e| panic!("draw failed: {e}"));
        terminal.backend().buffer().clone()
    }

    /// Text of row `y` with trailing spaces trimmed.
    pub fn row_text(buffer: &Buffer, y: u16) -> String {
        let width = buffer.area.width;
        let text: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
        text.trim_end().to_string()
    }

    /// All rows, trimmed.
    pub fn screen(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height).map(|y| row_text(buffer, y)).collect()
    }
}
