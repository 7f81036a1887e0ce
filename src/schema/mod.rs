//! Declarative validation schema for the quotation forms
//!
//! Each [`FormVariant`] resolves to a [`Schema`] (field constraints and
//! messages) and an ordered list of [`StepDefinition`]s naming which fields
//! must validate before a step can be left.

mod catalog;
mod rules;
mod submission;

pub use rules::{FieldErrors, Rule, SelectOption};
pub use submission::Submission;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which questionnaire the wizard runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Single-page contact survey
    #[default]
    Contact,
    /// Four-step project quotation
    Project,
}

impl FormVariant {
    /// Parse a variant from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "contact" => Some(Self::Contact),
            "project" => Some(Self::Project),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Project => "project",
        }
    }

    /// Heading shown above the form
    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Información de Contacto",
            Self::Project => "Solicitud de Cotización",
        }
    }

    /// Closing notice shown on the final step, if any
    pub fn disclaimer(&self) -> Option<&'static str> {
        match self {
            Self::Contact => Some(
                "Al enviar esta encuesta, aceptas que INTEZIA se ponga en contacto contigo para colaborar en tus proyectos futuros.",
            ),
            Self::Project => None,
        }
    }

    pub fn schema(&self) -> Schema {
        let fields = match self {
            Self::Contact => catalog::CONTACT_FIELDS,
            Self::Project => catalog::PROJECT_FIELDS,
        };
        Schema {
            variant: *self,
            fields,
        }
    }

    pub fn steps(&self) -> &'static [StepDefinition] {
        match self {
            Self::Contact => catalog::CONTACT_STEPS,
            Self::Project => catalog::PROJECT_STEPS,
        }
    }
}

/// Declaration of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key used in form state and in the submitted JSON
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub multiline: bool,
    pub rule: Rule,
}

impl FieldSpec {
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        self.rule.options()
    }

    pub fn is_select(&self) -> bool {
        self.options().is_some()
    }
}

/// One screen of the wizard and the fields it gates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub label: &'static str,
    pub fields: &'static [&'static str],
}

/// Read access to raw field values by name
pub trait FieldValues {
    /// Raw value of a field, empty when unset
    fn field_value(&self, name: &str) -> &str;
}

impl FieldValues for HashMap<String, String> {
    fn field_value(&self, name: &str) -> &str {
        self.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Field constraints for one variant
#[derive(Debug, Clone)]
pub struct Schema {
    variant: FormVariant,
    fields: &'static [FieldSpec],
}

impl Schema {
    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate one field; `None` when valid or not part of this schema
    pub fn validate_field(&self, name: &str, value: &str) -> Option<&'static str> {
        self.field(name).and_then(|spec| spec.rule.check(value).err())
    }

    /// Validate only the named fields, ignoring everything else
    pub fn validate_subset(&self, values: &impl FieldValues, names: &[&str]) -> FieldErrors {
        self.collect_errors(values, names.iter().copied())
    }

    /// Validate every field of the schema
    pub fn validate_all(&self, values: &impl FieldValues) -> FieldErrors {
        self.collect_errors(values, self.fields.iter().map(|f| f.name))
    }

    fn collect_errors<'a>(
        &self,
        values: &impl FieldValues,
        names: impl Iterator<Item = &'a str>,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for name in names {
            let Some(spec) = self.field(name) else {
                continue;
            };
            if let Some(message) = self.validate_field(spec.name, values.field_value(spec.name)) {
                errors.insert(spec.name, message);
            }
        }
        errors
    }

    /// Validate everything and produce the typed, trimmed payload
    pub fn parse(&self, values: &impl FieldValues) -> Result<Submission, FieldErrors> {
        let errors = self.validate_all(values);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Submission::from_values(self.variant, values))
    }
}
