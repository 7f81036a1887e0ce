//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows used by a multiline text box
const MULTILINE_HEIGHT: u16 = 6;
/// Options visible at once in an open select list
const MAX_VISIBLE_OPTIONS: usize = 8;

/// Rows needed to draw a field, excluding its error line
pub fn field_height(field: &FormField, is_active: bool) -> u16 {
    if field.is_select() && is_active {
        field.options().len().min(MAX_VISIBLE_OPTIONS) as u16 + 2
    } else if field.is_multiline() {
        MULTILINE_HEIGHT
    } else {
        3
    }
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a form field, choosing text or select presentation
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    if field.is_select() {
        draw_select_field(frame, area, field, is_active, has_error);
    } else {
        draw_text_field(frame, area, field, is_active, has_error);
    }
}

/// Draw a text input with a cursor when focused
fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if value.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(field.spec.placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value.split('\n').map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        Paragraph::new(lines)
    } else {
        let text_style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(value, text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a single-select field. Closed, it shows the chosen label; focused,
/// it lists the options with the choice marked.
fn draw_select_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    if !is_active {
        let chosen = field.display_value();
        let line = if chosen.is_empty() {
            Line::from(Span::styled(
                field.spec.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::styled(chosen, Style::default().fg(Color::Gray)))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let options = field.options();
    let highlighted = field.highlighted().unwrap_or(0);
    let visible = options.len().min(MAX_VISIBLE_OPTIONS).max(1);
    let start = highlighted
        .saturating_sub(visible - 1)
        .min(options.len().saturating_sub(visible));

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(idx, option)| {
            let is_selected = field.is_selected(option.value);
            let marker = if is_selected { "●" } else { "○" };
            let mut style = if is_selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            if idx == highlighted {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(format!("{marker} {}", option.label), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw a validation message under a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(paragraph, area);
}
