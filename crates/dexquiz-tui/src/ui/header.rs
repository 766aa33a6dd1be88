//! Header line
//!
//! Displays the guessed count and, when enabled, the elapsed time.

use dexquiz_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Render the header line.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(app.header()).style(style), area);
}
