//! Form field value objects

use crate::schema::{FieldSpec, SelectOption};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Literal value of the chosen option (empty when nothing is chosen) and
    /// the option the cursor is on
    Choice { value: String, highlighted: usize },
}

/// Represents a single form field with its declaration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: &'static FieldSpec,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field for a declaration
    pub fn new(spec: &'static FieldSpec) -> Self {
        let value = if spec.is_select() {
            FieldValue::Choice {
                value: String::new(),
                highlighted: 0,
            }
        } else {
            FieldValue::Text(String::new())
        };
        Self { spec, value }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn is_multiline(&self) -> bool {
        self.spec.multiline
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    pub fn options(&self) -> &'static [SelectOption] {
        self.spec.options().unwrap_or(&[])
    }

    /// Raw value (option literal for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { value, .. } => value,
        }
    }

    /// Set the text value (ignored for select fields)
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if c == '\n' && !self.spec.multiline {
                    return;
                }
                s.push(c);
            }
            FieldValue::Choice { .. } => {
                // Select fields only change through option selection
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { value, highlighted } => {
                value.clear();
                *highlighted = 0;
            }
        }
    }

    /// Choose the option with this literal value, replacing any previous
    /// choice. Returns false for text fields and unknown values.
    pub fn select(&mut self, option_value: &str) -> bool {
        let Some(index) = self.options().iter().position(|o| o.value == option_value) else {
            return false;
        };
        match &mut self.value {
            FieldValue::Choice { value, highlighted } => {
                *value = option_value.to_string();
                *highlighted = index;
                true
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Option under the cursor of a select field
    pub fn highlighted_option(&self) -> Option<&'static SelectOption> {
        self.highlighted().and_then(|i| self.options().get(i))
    }

    pub fn highlighted(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Choice { highlighted, .. } => Some(*highlighted),
            FieldValue::Text(_) => None,
        }
    }

    /// Move the option cursor down, wrapping
    pub fn highlight_next(&mut self) {
        let count = self.options().len();
        if let FieldValue::Choice { highlighted, .. } = &mut self.value {
            if count > 0 {
                *highlighted = (*highlighted + 1) % count;
            }
        }
    }

    /// Move the option cursor up, wrapping
    pub fn highlight_prev(&mut self) {
        let count = self.options().len();
        if let FieldValue::Choice { highlighted, .. } = &mut self.value {
            if count > 0 {
                *highlighted = if *highlighted == 0 {
                    count - 1
                } else {
                    *highlighted - 1
                };
            }
        }
    }

    /// Whether `option_value` is the current choice
    pub fn is_selected(&self, option_value: &str) -> bool {
        match &self.value {
            FieldValue::Choice { value, .. } => !value.is_empty() && value == option_value,
            FieldValue::Text(_) => false,
        }
    }

    /// The chosen option, if any
    pub fn selected_option(&self) -> Option<&'static SelectOption> {
        let value = self.as_text();
        self.options().iter().find(|o| o.value == value)
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => self
                .selected_option()
                .map(|o| o.label.to_string())
                .unwrap_or_default(),
        }
    }
}
