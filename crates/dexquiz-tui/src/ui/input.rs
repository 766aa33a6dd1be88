//! Input box
//!
//! Displays the guess being typed with cursor. Dimmed during the post-guess
//! pause, when Enter is ignored.

use dexquiz_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const PROMPT: &str = " Enter Pokémon name: ";
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const LEFT_PADDING: u16 = 1; // inside left border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input box and place the cursor.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(PROMPT);

    let style = if app.is_paused() {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    };

    let input = app.input();
    let paragraph = Paragraph::new(input.text()).style(style).block(block);
    frame.render_widget(paragraph, area);

    let available_width = area.width.saturating_sub(LEFT_PADDING + RIGHT_PADDING);
    let cursor_offset = u16::try_from(input.cursor()).unwrap_or(u16::MAX).min(available_width);

    let cursor_x = area.x.saturating_add(LEFT_PADDING).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);

    frame.set_cursor_position((cursor_x.min(max_x), cursor_y));
}
