//! Application state and core logic

use crate::schema::FormVariant;
use crate::state::{Form, SubmitBlocked, Wizard, WizardButton};
use crate::webhook::{SubmitError, WebhookClientTrait};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Wizard controller owning the form session
    pub wizard: Wizard,
    /// Webhook client shared with the submission task
    client: Arc<dyn WebhookClientTrait>,
    /// Whether the app should quit
    quit: bool,
    /// Result channel of the in-flight submission
    pending: Option<oneshot::Receiver<Result<(), SubmitError>>>,
    /// Transient hint shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(variant: FormVariant, client: Arc<dyn WebhookClientTrait>) -> Self {
        Self {
            wizard: Wizard::new(variant),
            client,
            quit: false,
            pending: None,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request shutdown. Form values are discarded with the session.
    pub fn quit(&mut self) {
        if self.wizard.is_submitting() {
            tracing::warn!("Quitting with a submission still in flight");
        } else if !self.wizard.form().is_blank() {
            tracing::info!("Discarding unsent answers");
        }
        self.quit = true;
    }

    /// Apply the result of the in-flight submission, if it has resolved
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => Err(SubmitError::Aborted),
        };
        self.pending = None;
        self.status_message = None;
        self.wizard.finish_submit(result);
    }

    /// Validate and, if valid, post the form on a background task
    pub fn start_submit(&mut self) {
        let submission = match self.wizard.begin_submit() {
            Ok(submission) => submission,
            Err(SubmitBlocked::InFlight) => {
                self.status_message = Some("Enviando...".to_string());
                return;
            }
            Err(SubmitBlocked::Invalid) => {
                self.status_message = Some("Corrige los campos marcados".to_string());
                return;
            }
        };

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let result = client.submit(&submission).await;
            // Receiver is gone only if the app already quit
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        self.status_message = Some("Enviando...".to_string());
    }

    fn go_next(&mut self) {
        if self.wizard.go_next() {
            self.status_message = None;
        } else if !self.wizard.errors().is_empty() {
            self.status_message = Some("Corrige los campos marcados".to_string());
        }
    }

    fn go_previous(&mut self) {
        if self.wizard.go_previous() {
            self.status_message = None;
        }
    }

    fn activate_button(&mut self) {
        match self.wizard.selected_button() {
            WizardButton::Previous => self.go_previous(),
            WizardButton::Next => self.go_next(),
            WizardButton::Submit => self.start_submit(),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notification dialog captures input until dismissed
        if self.wizard.notification().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.wizard.dismiss_notification();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('s') if ctrl => {
                if self.wizard.is_last_step() {
                    self.start_submit();
                }
            }
            KeyCode::Char('n') if ctrl => self.go_next(),
            KeyCode::Char('p') if ctrl => self.go_previous(),
            KeyCode::PageDown => self.go_next(),
            KeyCode::PageUp => self.go_previous(),
            KeyCode::Tab => self.wizard.next_field(),
            KeyCode::BackTab => self.wizard.prev_field(),
            _ if self.wizard.is_buttons_row_active() => self.handle_button_row_key(key),
            _ => self.handle_field_key(key),
        }
    }

    fn handle_button_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.wizard.prev_button(),
            KeyCode::Right => self.wizard.next_button(),
            KeyCode::Up => self.wizard.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_button(),
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(field) = self.wizard.active_form_field_mut() else {
            return;
        };

        if field.is_select() {
            match key.code {
                KeyCode::Up => field.highlight_prev(),
                KeyCode::Down => field.highlight_next(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let name = field.name();
                    if let Some(option) = field.highlighted_option() {
                        self.wizard.select_option(name, option.value);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('u') if ctrl => {
                let name = field.name();
                self.wizard.set_value(name, "");
            }
            KeyCode::Char(c) if !ctrl => field.push_char(c),
            KeyCode::Backspace => field.pop_char(),
            KeyCode::Enter if field.is_multiline() => field.push_char('\n'),
            KeyCode::Enter | KeyCode::Down => self.wizard.next_field(),
            KeyCode::Up => self.wizard.prev_field(),
            _ => {}
        }
    }
}
