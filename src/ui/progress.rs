//! Step progress indicator

use crate::state::{StepStatus, Wizard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

/// Rows used by the indicator (labels + connector line)
pub const PROGRESS_HEIGHT: u16 = 2;

/// Draw step markers and the connector gauge.
/// Single-step forms have nothing to show.
pub fn draw_progress(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    if wizard.total_steps() <= 1 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut spans = Vec::new();
    for (idx, step) in wizard.steps().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        let number = idx + 1;
        let (marker, style) = match wizard.step_status(number) {
            StepStatus::Completed => ("✓", Style::default().fg(Color::Green)),
            StepStatus::Current => (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Pending => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!("{marker} {number}. {}", step.label), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(wizard.progress_ratio());
    frame.render_widget(gauge, rows[1]);
}
