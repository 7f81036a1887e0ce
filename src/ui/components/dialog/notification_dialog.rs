//! Submission outcome dialog

use super::base::{render_dialog, DialogContent};
use crate::state::Notification;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the success/failure notification centered on the screen
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let color = if notification.is_error() {
        Color::Red
    } else {
        Color::Green
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Pulsa "),
        Span::styled("Enter", key_style),
        Span::raw(" o "),
        Span::styled("Esc", key_style),
        Span::raw(" para cerrar"),
    ];

    render_dialog(
        frame,
        DialogContent {
            title: notification.title,
            accent: color,
            message: notification.description,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
