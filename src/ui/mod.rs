//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod progress;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area(), &app.wizard);

    layout::draw_header(frame, regions.header, &app.wizard);
    progress::draw_progress(frame, regions.progress, &app.wizard);
    forms::draw_step(frame, regions.content, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Notifications sit above everything else
    if let Some(notification) = app.wizard.notification() {
        components::render_notification_dialog(frame, notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormVariant;
    use crate::webhook::{MockWebhookClientTrait, SubmitError};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app(variant: FormVariant) -> App {
        App::new(variant, Arc::new(MockWebhookClientTrait::new()))
    }

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_contact_form_renders_single_step() {
        let rows = render(&app(FormVariant::Contact));
        assert!(screen_contains(&rows, "Paso 1 de 1: Información de Contacto"));
        assert!(screen_contains(&rows, "Enviar"));
        assert!(!screen_contains(&rows, "Siguiente"));
    }

    #[test]
    fn test_project_form_shows_progress_and_next() {
        let rows = render(&app(FormVariant::Project));
        assert!(screen_contains(&rows, "Solicitud de Cotización"));
        assert!(screen_contains(&rows, "● 1. Proyecto"));
        assert!(screen_contains(&rows, "○ 2. Presupuesto"));
        assert!(screen_contains(&rows, "Siguiente"));
        assert!(!screen_contains(&rows, "Anterior"));
    }

    #[test]
    fn test_selected_budget_option_is_marked() {
        let mut app = app(FormVariant::Project);
        app.wizard.set_value("projectName", "Portal");
        app.wizard
            .set_value("projectDescription", "Portal de clientes con reservas");
        app.wizard.select_option("serviceType", "web-development");
        assert!(app.wizard.go_next());

        app.wizard.select_option("budgetRange", "less-5k");
        app.wizard.select_option("budgetRange", "5k-15k");
        let rows = render(&app);

        assert!(screen_contains(&rows, "✓ 1. Proyecto"));
        assert!(screen_contains(&rows, "● $5,000 - $15,000"));
        assert!(screen_contains(&rows, "○ Menos de $5,000"));
        assert!(screen_contains(&rows, "Anterior"));
    }

    #[test]
    fn test_step_errors_render_under_fields() {
        let mut app = app(FormVariant::Project);
        assert!(!app.wizard.go_next());
        let rows = render(&app);
        let message = app.wizard.error_for("serviceType").unwrap();
        assert!(screen_contains(&rows, message));
    }

    #[test]
    fn test_notification_dialog_overlays_form() {
        let mut app = app(FormVariant::Contact);
        app.wizard.finish_submit(Err(SubmitError::Aborted));
        let rows = render(&app);
        assert!(screen_contains(&rows, "Error al enviar"));
        assert!(screen_contains(&rows, "Por favor intenta nuevamente"));
    }
}
