//! Completion screen
//!
//! Replaces the grid once every entry has been revealed.

use dexquiz_app::App;
use dexquiz_core::format_elapsed;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

const BANNER: [&str; 3] = [
    "*************************************",
    "*  P O K E D E X   C O M P L E T E  *",
    "*************************************",
];

/// Render the completion screen, centered vertically.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let highlight = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let total = app.session().roster().len();

    let mut lines: Vec<Line> = BANNER.iter().map(|row| Line::styled(*row, highlight)).collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("Congratulations, you have found all {total} Pokémon!"),
        highlight,
    ));
    if app.config().show_timer {
        lines.push(Line::from(format!("Time: {}", format_elapsed(app.elapsed()))));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Press any key to exit", Style::default().fg(Color::DarkGray)));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height), Constraint::Min(0)])
        .split(area);

    let [_, body, _] = chunks.as_ref() else {
        return;
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *body);
}
