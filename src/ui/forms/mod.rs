//! Form rendering module
//!
//! This module draws the current wizard step:
//! - `field_renderer`: Text and select field rendering

mod field_renderer;

use crate::app::App;
use crate::state::{Form, FormField};
use crate::ui::components::{render_button_row, BUTTON_HEIGHT};
use field_renderer::{draw_field, draw_field_error, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the current step's fields, the closing notice and the action buttons
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.wizard;
    let step = wizard.current_step_def();

    let block = Block::default()
        .title(format!(
            " Paso {} de {}: {} ",
            wizard.current_step(),
            wizard.total_steps(),
            step.label
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let disclaimer = wizard
        .variant()
        .disclaimer()
        .filter(|_| wizard.is_last_step());
    let disclaimer_height = if disclaimer.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Fields
            Constraint::Length(disclaimer_height), // Closing notice
            Constraint::Length(BUTTON_HEIGHT),     // Buttons
        ])
        .horizontal_margin(1)
        .split(inner);

    let fields = wizard.current_fields();
    let active = wizard.active_field();
    let heights: Vec<u16> = fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            slot_height(field, idx == active, wizard.error_for(field.name()).is_some())
        })
        .collect();

    let start = first_visible(&heights, active, chunks[0].height);
    let mut y = chunks[0].y;
    let bottom = chunks[0].y + chunks[0].height;
    for (idx, field) in fields.iter().enumerate().skip(start) {
        // A field taller than the area is clipped rather than hidden
        let height = if idx == start {
            heights[idx].min(bottom - y)
        } else if y + heights[idx] > bottom {
            break;
        } else {
            heights[idx]
        };
        let error = wizard.error_for(field.name()).filter(|_| height > 1);
        let box_height = height - u16::from(error.is_some());
        draw_field(
            frame,
            Rect::new(chunks[0].x, y, chunks[0].width, box_height),
            field,
            idx == active,
            error.is_some(),
        );
        if let Some(message) = error {
            draw_field_error(
                frame,
                Rect::new(chunks[0].x, y + box_height, chunks[0].width, 1),
                message,
            );
        }
        y += height;
    }

    if let Some(text) = disclaimer {
        let notice = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[1]);
    }

    render_button_row(frame, chunks[2], wizard);
}

/// Rows for a field box plus its error line
fn slot_height(field: &FormField, is_active: bool, has_error: bool) -> u16 {
    field_height(field, is_active) + u16::from(has_error)
}

/// First field index to draw so the focused field stays in view.
/// With the button row focused, the tail of the list is kept visible.
fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let last = active.min(heights.len().saturating_sub(1));
    let mut used = 0u16;
    let mut start = last + 1;
    while start > 0 {
        let next = used.saturating_add(heights[start - 1]);
        if next > available {
            break;
        }
        used = next;
        start -= 1;
    }
    start.min(last)
}
