//! User-facing outcome messages

/// Tone of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A `(title, description)` pair shown after a submission resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn submitted() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "¡Encuesta enviada!",
            description: "Gracias por tu tiempo. Te contactaremos pronto",
        }
    }

    pub fn submit_failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error al enviar",
            description: "Por favor intenta nuevamente",
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
