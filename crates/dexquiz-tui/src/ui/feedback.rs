//! Feedback line
//!
//! Displays the outcome of the last guess.

use dexquiz_app::{App, FeedbackKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

/// Color used for each kind of feedback.
pub fn color(kind: FeedbackKind) -> Color {
    match kind {
        FeedbackKind::Correct => Color::Green,
        FeedbackKind::AlreadyGuessed => Color::Yellow,
        FeedbackKind::Incorrect | FeedbackKind::Invalid => Color::Red,
    }
}

/// Render the feedback line. Blank before the first guess.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let Some(feedback) = app.feedback() else {
        return;
    };

    let span = Span::styled(feedback.message.as_str(), Style::default().fg(color(feedback.kind)));
    frame.render_widget(Paragraph::new(span), area);
}
