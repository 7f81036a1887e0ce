//! Form state and focus handling

use super::field::FormField;
use crate::schema::{FieldValues, Schema};

/// Trait for common focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// All field values of the in-progress submission
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    /// Create an empty form for every field of the schema
    pub fn new(schema: &Schema) -> Self {
        Self {
            fields: schema.fields().iter().map(FormField::new).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Raw value of a field, empty when unset or unknown
    pub fn value(&self, name: &str) -> &str {
        self.get(name).map(FormField::as_text).unwrap_or("")
    }

    /// Replace a text field's value. Returns false for unknown or select fields.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.get_mut(name) {
            Some(field) if !field.is_select() => {
                field.set_text(value.into());
                true
            }
            _ => false,
        }
    }

    /// Choose an option on a select field
    pub fn select(&mut self, name: &str, option_value: &str) -> bool {
        self.get_mut(name)
            .is_some_and(|field| field.select(option_value))
    }

    /// Clear every field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// True when nothing has been entered yet
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.as_text().is_empty())
    }
}

impl FieldValues for FormState {
    fn field_value(&self, name: &str) -> &str {
        self.value(name)
    }
}
