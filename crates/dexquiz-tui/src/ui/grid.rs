//! Roster grid
//!
//! Displays every entry in column-major order. Revealed names are green and
//! hidden slots are dim. When the grid is taller than its area only the rows
//! from the app's scroll offset down are shown.

use dexquiz_app::App;
use dexquiz_core::grid::{COLUMN_SPACING, Cell};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the grid.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let grid = app.grid();
    let spacer = " ".repeat(COLUMN_SPACING);

    let lines: Vec<Line> = (0..grid.rows())
        .map(|row| {
            let mut spans = Vec::with_capacity(grid.columns() * 2);
            for (column, cell) in grid.row(row).enumerate() {
                if column > 0 {
                    spans.push(Span::raw(spacer.clone()));
                }
                spans.push(Span::styled(cell.text(), cell_style(cell)));
            }
            Line::from(spans)
        })
        .collect();

    let last_page = grid.rows().saturating_sub(usize::from(area.height));
    let offset = u16::try_from(app.grid_scroll().min(last_page)).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn cell_style(cell: &Cell<'_>) -> Style {
    if cell.is_revealed() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}
