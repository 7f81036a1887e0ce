//! Form domain layer
//!
//! Field values and focus handling shared by every wizard step.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, FormState};
