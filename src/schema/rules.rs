//! Field constraints and the error map they produce

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use url::Url;

/// Local part, `@`, dot-terminated labels, alphabetic TLD. Leading dots and
/// consecutive dots are rejected separately since `regex` has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// One entry of an enumerated select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Literal value sent to the webhook
    pub value: &'static str,
    /// Text shown to the user
    pub label: &'static str,
}

/// Acceptance predicate for a single field, with the messages it reports
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Trimmed character count within `[min, max]`
    Length {
        min: usize,
        max: usize,
        too_short: &'static str,
        too_long: &'static str,
    },
    /// Trimmed email address no longer than `max`
    Email {
        max: usize,
        invalid: &'static str,
        too_long: &'static str,
    },
    /// Blank, or a trimmed absolute URL
    OptionalUrl { invalid: &'static str },
    /// Non-empty and one of the listed option values
    OneOf {
        options: &'static [SelectOption],
        required: &'static str,
        invalid: &'static str,
    },
}

impl Rule {
    /// Check a raw value, returning the first failing message
    pub fn check(&self, raw: &str) -> Result<(), &'static str> {
        match *self {
            Rule::Length {
                min,
                max,
                too_short,
                too_long,
            } => {
                let len = text_len(raw.trim());
                if len < min {
                    Err(too_short)
                } else if len > max {
                    Err(too_long)
                } else {
                    Ok(())
                }
            }
            Rule::Email {
                max,
                invalid,
                too_long,
            } => {
                let value = raw.trim();
                if !is_valid_email(value) {
                    Err(invalid)
                } else if text_len(value) > max {
                    Err(too_long)
                } else {
                    Ok(())
                }
            }
            Rule::OptionalUrl { invalid } => {
                let value = raw.trim();
                if value.is_empty() || is_valid_url(value) {
                    Ok(())
                } else {
                    Err(invalid)
                }
            }
            Rule::OneOf {
                options,
                required,
                invalid,
            } => {
                if raw.is_empty() {
                    Err(required)
                } else if options.iter().any(|o| o.value == raw) {
                    Ok(())
                } else {
                    Err(invalid)
                }
            }
        }
    }

    /// Options for select-style rules
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        match self {
            Rule::OneOf { options, .. } => Some(options),
            _ => None,
        }
    }
}

/// Length in UTF-16 code units, the unit browser form validators count in
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Field name to message, one entry per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing field names in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
