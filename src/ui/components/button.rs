//! Button component for TUI

use crate::state::{Wizard, WizardButton};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

const BUTTON_WIDTH: u16 = 16;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the step's action buttons, right-aligned
pub fn render_button_row(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let buttons = wizard.buttons();
    let row_active = wizard.is_buttons_row_active();
    let selected = wizard.selected_button();

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(buttons.iter().map(|_| Constraint::Length(BUTTON_WIDTH)));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, button) in buttons.iter().enumerate() {
        let submitting = wizard.is_submitting() && *button == WizardButton::Submit;
        let label = if submitting {
            "Enviando..."
        } else {
            button.label()
        };
        render_button(
            frame,
            chunks[idx + 1],
            label,
            row_active && *button == selected,
            !submitting,
        );
    }
}
