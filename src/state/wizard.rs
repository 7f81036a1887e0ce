//! Step wizard controller
//!
//! Holds the current step, the form values and the last validation errors.
//! Moving forward is gated on the current step's fields; moving back never
//! validates. Submission validates the whole schema and hands the typed
//! payload to a [`WebhookClientTrait`].

use super::forms::{Form, FormField, FormState};
use super::notification::Notification;
use crate::schema::{FieldErrors, FormVariant, Schema, StepDefinition, Submission};
use crate::webhook::{SubmitError, WebhookClientTrait};

/// Buttons on the action row of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardButton {
    Previous,
    Next,
    Submit,
}

impl WizardButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "Anterior",
            Self::Next => "Siguiente",
            Self::Submit => "Enviar",
        }
    }
}

/// Display state of a step in the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

/// Why a submission was not started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Full validation failed; errors are exposed on the wizard
    Invalid,
    /// A previous submission has not resolved yet
    InFlight,
}

/// Result of a complete submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    InFlight,
    Delivered,
    Failed,
}

/// Wizard controller for one form session
#[derive(Debug, Clone)]
pub struct Wizard {
    schema: Schema,
    steps: &'static [StepDefinition],
    /// 1-based, always within `[1, steps.len()]`
    current_step: usize,
    form: FormState,
    errors: FieldErrors,
    submitting: bool,
    notification: Option<Notification>,
    /// Index into the current step's fields; one past the end is the button row
    active_field_index: usize,
    selected_button: usize,
}

impl Wizard {
    pub fn new(variant: FormVariant) -> Self {
        let schema = variant.schema();
        let form = FormState::new(&schema);
        let mut wizard = Self {
            schema,
            steps: variant.steps(),
            current_step: 1,
            form,
            errors: FieldErrors::new(),
            submitting: false,
            notification: None,
            active_field_index: 0,
            selected_button: 0,
        };
        wizard.reset_focus();
        wizard
    }

    pub fn variant(&self) -> FormVariant {
        self.schema.variant()
    }

    pub fn steps(&self) -> &'static [StepDefinition] {
        self.steps
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_step_def(&self) -> &'static StepDefinition {
        let steps = self.steps;
        &steps[self.current_step - 1]
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Fields shown on the current step, in declaration order
    pub fn current_fields(&self) -> Vec<&FormField> {
        self.current_step_def()
            .fields
            .iter()
            .filter_map(|name| self.form.get(name))
            .collect()
    }

    /// Replace a text field's value. No validation runs here.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set_text(name, value)
    }

    /// Choose an option on a select field. No validation runs here.
    pub fn select_option(&mut self, name: &str, option_value: &str) -> bool {
        self.form.select(name, option_value)
    }

    /// Validate the current step and advance if it passes
    pub fn go_next(&mut self) -> bool {
        let step = self.current_step_def();
        let step_errors = self.schema.validate_subset(&self.form, step.fields);

        for name in step.fields {
            self.errors.remove(name);
        }

        if !step_errors.is_empty() {
            tracing::debug!(
                step = self.current_step,
                failing = step_errors.len(),
                "Step validation failed"
            );
            for name in step_errors.fields() {
                if let Some(message) = step_errors.get(name) {
                    self.errors.insert(name, message);
                }
            }
            return false;
        }

        if self.is_last_step() {
            return false;
        }

        self.current_step = (self.current_step + 1).min(self.total_steps());
        tracing::debug!(step = self.current_step, "Advanced to step");
        self.reset_focus();
        true
    }

    /// Step back without validating
    pub fn go_previous(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.current_step = self.current_step.saturating_sub(1).max(1);
        tracing::debug!(step = self.current_step, "Went back to step");
        self.reset_focus();
        true
    }

    /// Validate everything and mark the submission as in flight.
    ///
    /// On failure every error is exposed and the wizard moves to the earliest
    /// step that has one. Pair with [`Wizard::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        match self.schema.parse(&self.form) {
            Ok(submission) => {
                self.errors.clear();
                self.notification = None;
                self.submitting = true;
                Ok(submission)
            }
            Err(errors) => {
                tracing::debug!(failing = errors.len(), "Submission blocked by validation");
                self.errors = errors;
                if let Some(step) = self.first_step_with_error() {
                    if step != self.current_step {
                        self.current_step = step;
                        self.reset_focus();
                    }
                }
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// Apply the webhook result and clear the in-flight flag
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!(variant = self.variant().name(), "Survey submitted");
                self.notification = Some(Notification::submitted());
                self.form.reset();
                self.errors.clear();
                self.current_step = 1;
                self.reset_focus();
                SubmitOutcome::Delivered
            }
            Err(e) => {
                tracing::error!("Submission failed: {e}");
                self.notification = Some(Notification::submit_failed());
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, post once, and record the outcome
    #[allow(dead_code)]
    pub async fn submit(&mut self, client: &dyn WebhookClientTrait) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(SubmitBlocked::Invalid) => return SubmitOutcome::Invalid,
            Err(SubmitBlocked::InFlight) => return SubmitOutcome::InFlight,
        };
        let result = client.submit(&submission).await;
        self.finish_submit(result)
    }

    fn first_step_with_error(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.fields.iter().any(|f| self.errors.contains(f)))
            .map(|i| i + 1)
    }

    /// Progress indicator state for a 1-based step number
    pub fn step_status(&self, step: usize) -> StepStatus {
        match step.cmp(&self.current_step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Fraction of the connector line filled, 0.0 on the first step
    pub fn progress_ratio(&self) -> f64 {
        let total = self.total_steps();
        if total <= 1 {
            return 0.0;
        }
        (self.current_step - 1) as f64 / (total - 1) as f64
    }

    // Focus handling

    /// Buttons available on the current step
    pub fn buttons(&self) -> Vec<WizardButton> {
        let mut buttons = Vec::new();
        if !self.is_first_step() {
            buttons.push(WizardButton::Previous);
        }
        if self.is_last_step() {
            buttons.push(WizardButton::Submit);
        } else {
            buttons.push(WizardButton::Next);
        }
        buttons
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.current_step_def().fields.len()
    }

    pub fn selected_button(&self) -> WizardButton {
        let buttons = self.buttons();
        buttons[self.selected_button.min(buttons.len() - 1)]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        let count = self.buttons().len();
        self.selected_button = (self.selected_button + 1) % count;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Focused field, `None` on the button row
    pub fn active_form_field(&self) -> Option<&FormField> {
        let name = self.current_step_def().fields.get(self.active_field_index)?;
        self.form.get(name)
    }

    pub fn active_form_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.current_step_def().fields.get(self.active_field_index)?;
        self.form.get_mut(name)
    }

    fn reset_focus(&mut self) {
        self.active_field_index = 0;
        // Default to the forward action
        self.selected_button = self.buttons().len() - 1;
    }
}

impl Form for Wizard {
    fn field_count(&self) -> usize {
        self.current_step_def().fields.len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::MockWebhookClientTrait;

    fn fill_project_step1(w: &mut Wizard) {
        w.set_value("projectName", "Portal");
        w.set_value("projectDescription", "Portal de clientes con reservas");
        w.select_option("serviceType", "web-development");
    }

    fn filled_project() -> Wizard {
        let mut w = Wizard::new(FormVariant::Project);
        fill_project_step1(&mut w);
        w.select_option("budgetRange", "5k-15k");
        w.select_option("timeline", "1-3-months");
        w.set_value("name", "  Ana  ");
        w.set_value("email", "ana@empresa.com");
        w
    }

    fn filled_contact() -> Wizard {
        let mut w = Wizard::new(FormVariant::Contact);
        w.set_value("name", "Ana Pérez");
        w.set_value("email", "ana@empresa.com");
        w.set_value("phone", "+58 412 1234567");
        w.set_value("company", "Empresa");
        w.set_value("position", "CTO");
        w.select_option("consultant", "Juan Figuera");
        w
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_first_step() {
            let w = Wizard::new(FormVariant::Project);
            assert_eq!(w.current_step(), 1);
            assert_eq!(w.total_steps(), 4);
            assert!(w.errors().is_empty());
            assert!(!w.is_submitting());
        }

        #[test]
        fn test_go_next_blocked_by_missing_service_type() {
            let mut w = Wizard::new(FormVariant::Project);
            w.set_value("projectName", "Portal");
            w.set_value("projectDescription", "Portal de clientes con reservas");

            assert!(!w.go_next());
            assert_eq!(w.current_step(), 1);
            assert_eq!(w.errors().fields().collect::<Vec<_>>(), vec!["serviceType"]);
            assert_eq!(
                w.error_for("serviceType"),
                Some("Selecciona un tipo de servicio")
            );
        }

        #[test]
        fn test_go_next_advances_when_step_valid() {
            let mut w = Wizard::new(FormVariant::Project);
            fill_project_step1(&mut w);
            assert!(w.go_next());
            assert_eq!(w.current_step(), 2);
            assert!(w.errors().is_empty());
        }

        #[test]
        fn test_go_next_clears_fixed_errors_for_step() {
            let mut w = Wizard::new(FormVariant::Project);
            assert!(!w.go_next());
            assert_eq!(w.errors().len(), 3);
            fill_project_step1(&mut w);
            assert!(w.go_next());
            assert!(w.errors().is_empty());
        }

        #[test]
        fn test_go_next_clamped_on_last_step() {
            let mut w = filled_project();
            for _ in 0..10 {
                w.go_next();
            }
            assert_eq!(w.current_step(), 4);
        }

        #[test]
        fn test_go_previous_skips_validation() {
            let mut w = Wizard::new(FormVariant::Project);
            fill_project_step1(&mut w);
            w.select_option("budgetRange", "5k-15k");
            assert!(w.go_next());
            assert!(w.go_next());
            assert_eq!(w.current_step(), 3);

            // Make step 2 invalid behind the wizard's back
            w.form.get_mut("budgetRange").unwrap().clear();

            assert!(w.go_previous());
            assert_eq!(w.current_step(), 2);
            assert!(w.errors().is_empty());
        }

        #[test]
        fn test_go_previous_clamped_at_first_step() {
            let mut w = Wizard::new(FormVariant::Project);
            assert!(!w.go_previous());
            assert_eq!(w.current_step(), 1);
        }

        #[test]
        fn test_single_step_variant_never_moves() {
            let mut w = filled_contact();
            assert_eq!(w.total_steps(), 1);
            assert!(!w.go_next());
            assert!(!w.go_previous());
            assert_eq!(w.current_step(), 1);
            assert!(w.errors().is_empty());
        }

        #[test]
        fn test_selecting_option_does_not_validate() {
            let mut w = Wizard::new(FormVariant::Project);
            w.select_option("budgetRange", "5k-15k");
            assert!(w.errors().is_empty());
        }
    }

    mod progress {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_step_status() {
            let mut w = Wizard::new(FormVariant::Project);
            fill_project_step1(&mut w);
            w.go_next();
            assert_eq!(w.step_status(1), StepStatus::Completed);
            assert_eq!(w.step_status(2), StepStatus::Current);
            assert_eq!(w.step_status(3), StepStatus::Pending);
        }

        #[test]
        fn test_progress_ratio() {
            let mut w = filled_project();
            assert_eq!(w.progress_ratio(), 0.0);
            w.go_next();
            w.go_next();
            w.go_next();
            assert_eq!(w.progress_ratio(), 1.0);
            assert_eq!(Wizard::new(FormVariant::Contact).progress_ratio(), 0.0);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_buttons_per_step() {
            let mut w = filled_project();
            assert_eq!(w.buttons(), vec![WizardButton::Next]);
            w.go_next();
            assert_eq!(
                w.buttons(),
                vec![WizardButton::Previous, WizardButton::Next]
            );
            w.go_next();
            w.go_next();
            assert_eq!(
                w.buttons(),
                vec![WizardButton::Previous, WizardButton::Submit]
            );
            assert_eq!(w.selected_button(), WizardButton::Submit);
        }

        #[test]
        fn test_contact_form_only_has_submit() {
            let w = Wizard::new(FormVariant::Contact);
            assert_eq!(w.buttons(), vec![WizardButton::Submit]);
        }

        #[test]
        fn test_focus_cycles_through_step_fields_and_buttons() {
            let mut w = Wizard::new(FormVariant::Project);
            assert_eq!(w.active_form_field().unwrap().name(), "projectName");
            w.next_field();
            w.next_field();
            assert_eq!(w.active_form_field().unwrap().name(), "serviceType");
            w.next_field();
            assert!(w.is_buttons_row_active());
            assert!(w.active_form_field().is_none());
            w.next_field();
            assert_eq!(w.active_field(), 0);
        }

        #[test]
        fn test_focus_resets_on_step_change() {
            let mut w = Wizard::new(FormVariant::Project);
            fill_project_step1(&mut w);
            w.next_field();
            w.go_next();
            assert_eq!(w.active_field(), 0);
            assert_eq!(w.active_form_field().unwrap().name(), "budgetRange");
        }

        #[test]
        fn test_button_selection_wraps() {
            let mut w = filled_project();
            w.go_next();
            assert_eq!(w.selected_button(), WizardButton::Next);
            w.next_button();
            assert_eq!(w.selected_button(), WizardButton::Previous);
            w.prev_button();
            assert_eq!(w.selected_button(), WizardButton::Next);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submit_posts_once_and_succeeds() {
            let mut w = filled_contact();
            let mut client = MockWebhookClientTrait::new();
            client
                .expect_submit()
                .withf(|s| matches!(s, Submission::Contact(c) if c.consultant == "Juan Figuera"))
                .times(1)
                .returning(|_| Ok(()));

            let outcome = w.submit(&client).await;

            assert_eq!(outcome, SubmitOutcome::Delivered);
            assert_eq!(w.notification(), Some(&Notification::submitted()));
            assert!(!w.is_submitting());
            assert!(w.form().is_blank());
        }

        #[tokio::test]
        async fn test_rejected_submit_keeps_form() {
            let mut w = filled_project();
            w.go_next();
            w.go_next();
            w.go_next();
            let mut client = MockWebhookClientTrait::new();
            client
                .expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Status(500)));

            let outcome = w.submit(&client).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            let notification = w.notification().unwrap();
            assert!(notification.is_error());
            assert_eq!(notification.title, "Error al enviar");
            assert!(!w.is_submitting());
            assert_eq!(w.form().value("budgetRange"), "5k-15k");
            assert_eq!(w.form().value("name"), "  Ana  ");
            assert_eq!(w.current_step(), 4);
        }

        #[tokio::test]
        async fn test_invalid_submit_makes_no_request() {
            let mut w = filled_contact();
            w.set_value("email", "not-an-email");
            w.set_value("linkedin", "not-a-url");
            let mut client = MockWebhookClientTrait::new();
            client.expect_submit().times(0);

            let outcome = w.submit(&client).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(
                w.errors().fields().collect::<Vec<_>>(),
                vec!["email", "linkedin"]
            );
            assert!(w.notification().is_none());
            assert!(!w.is_submitting());
        }

        #[tokio::test]
        async fn test_invalid_submit_jumps_to_first_failing_step() {
            let mut w = filled_project();
            w.go_next();
            w.go_next();
            w.go_next();
            w.form.get_mut("budgetRange").unwrap().clear();
            let client = MockWebhookClientTrait::new();

            assert_eq!(w.submit(&client).await, SubmitOutcome::Invalid);
            assert_eq!(w.current_step(), 2);
            assert!(w.errors().contains("budgetRange"));
        }

        #[test]
        fn test_second_submit_blocked_while_in_flight() {
            let mut w = filled_contact();
            assert!(w.begin_submit().is_ok());
            assert!(w.is_submitting());
            assert_eq!(w.begin_submit(), Err(SubmitBlocked::InFlight));

            w.finish_submit(Ok(()));
            assert!(!w.is_submitting());
        }

        #[test]
        fn test_payload_is_trimmed() {
            let mut w = filled_project();
            match w.begin_submit().unwrap() {
                Submission::Project(p) => {
                    assert_eq!(p.name, "Ana");
                    assert_eq!(p.budget_range, "5k-15k");
                }
                other => panic!("unexpected submission {other:?}"),
            }
        }

        #[test]
        fn test_finish_failure_keeps_values_for_retry() {
            let mut w = filled_contact();
            w.begin_submit().unwrap();
            let outcome = w.finish_submit(Err(SubmitError::Status(503)));
            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(w.form().value("company"), "Empresa");
            assert!(w.begin_submit().is_ok());
        }

        #[test]
        fn test_dismiss_notification() {
            let mut w = filled_contact();
            w.begin_submit().unwrap();
            w.finish_submit(Ok(()));
            assert!(w.notification().is_some());
            w.dismiss_notification();
            assert!(w.notification().is_none());
        }

        #[test]
        fn test_submit_via_block_on() {
            let mut w = filled_contact();
            let mut client = MockWebhookClientTrait::new();
            client.expect_submit().times(1).returning(|_| Ok(()));
            let outcome = tokio_test::block_on(w.submit(&client));
            assert_eq!(outcome, SubmitOutcome::Delivered);
        }
    }
}
