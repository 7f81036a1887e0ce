//! Layout components (header, content, status bar)

use super::progress::PROGRESS_HEIGHT;
use crate::app::App;
use crate::state::Wizard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the wizard
pub struct WizardLayout {
    pub header: Rect,
    pub progress: Rect,
    pub content: Rect,
}

/// Split the screen into header, progress, content and a status bar row
pub fn create_layout(area: Rect, wizard: &Wizard) -> WizardLayout {
    let progress_height = if wizard.total_steps() > 1 {
        PROGRESS_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(progress_height), // Progress
            Constraint::Min(0),                  // Content
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    WizardLayout {
        header: chunks[0],
        progress: chunks[1],
        content: chunks[2],
    }
}

/// Draw the form title
pub fn draw_header(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", wizard.variant().title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.wizard.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_hints(&app.wizard),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " Esc:salir ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_width),
        y: area.height.saturating_sub(1),
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current step
fn get_hints(wizard: &Wizard) -> String {
    if wizard.notification().is_some() {
        return "Enter:cerrar".to_string();
    }
    let mut hints = vec!["Tab:campo"];
    match wizard.active_form_field() {
        Some(field) if field.is_select() => hints.push("↑/↓:opción  Enter:elegir"),
        Some(_) => hints.push("^U:borrar"),
        None => {}
    }
    if !wizard.is_first_step() {
        hints.push("^P:anterior");
    }
    if wizard.is_last_step() {
        hints.push("^S:enviar");
    } else {
        hints.push("^N:siguiente");
    }
    hints.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormVariant;

    #[test]
    fn test_hints_first_step_of_project_form() {
        let wizard = Wizard::new(FormVariant::Project);
        let hints = get_hints(&wizard);
        assert!(hints.contains("^N:siguiente"));
        assert!(!hints.contains("^P:anterior"));
        assert!(!hints.contains("^S:enviar"));
    }

    #[test]
    fn test_hints_single_step_form_offers_submit() {
        let wizard = Wizard::new(FormVariant::Contact);
        let hints = get_hints(&wizard);
        assert!(hints.contains("^S:enviar"));
        assert!(!hints.contains("^N:siguiente"));
    }

    #[test]
    fn test_layout_hides_progress_for_single_step() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create_layout(area, &Wizard::new(FormVariant::Contact));
        assert_eq!(layout.progress.height, 0);
        assert_eq!(layout.content.height, 22);

        let layout = create_layout(area, &Wizard::new(FormVariant::Project));
        assert_eq!(layout.progress.height, PROGRESS_HEIGHT);
        assert_eq!(layout.content.height, 20);
    }
}
