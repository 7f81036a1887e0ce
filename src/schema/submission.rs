//! Typed payloads produced by a successful full validation

use super::{FieldValues, FormVariant};
use serde::Serialize;

/// Contact survey answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    /// Empty when the visitor left it blank
    pub linkedin: String,
    pub consultant: String,
}

/// Project quotation answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub project_name: String,
    pub project_description: String,
    pub service_type: String,
    pub budget_range: String,
    pub timeline: String,
    pub name: String,
    pub email: String,
}

/// Body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Contact(ContactSubmission),
    Project(ProjectSubmission),
}

impl Submission {
    /// Build the payload from raw values. Callers validate first.
    pub(super) fn from_values(variant: FormVariant, values: &impl FieldValues) -> Self {
        let get = |name: &str| values.field_value(name).trim().to_string();
        match variant {
            FormVariant::Contact => Submission::Contact(ContactSubmission {
                name: get("name"),
                email: get("email"),
                phone: get("phone"),
                company: get("company"),
                position: get("position"),
                linkedin: get("linkedin"),
                consultant: get("consultant"),
            }),
            FormVariant::Project => Submission::Project(ProjectSubmission {
                project_name: get("projectName"),
                project_description: get("projectDescription"),
                service_type: get("serviceType"),
                budget_range: get("budgetRange"),
                timeline: get("timeline"),
                name: get("name"),
                email: get("email"),
            }),
        }
    }

    pub fn variant(&self) -> FormVariant {
        match self {
            Submission::Contact(_) => FormVariant::Contact,
            Submission::Project(_) => FormVariant::Project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_contact_serializes_flat_with_source_keys() {
        let submission = Submission::Contact(ContactSubmission {
            name: "Ana".into(),
            email: "ana@empresa.com".into(),
            phone: "1234567".into(),
            company: "Empresa".into(),
            position: "CTO".into(),
            linkedin: String::new(),
            consultant: "Angel Osuna".into(),
        });

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ana",
                "email": "ana@empresa.com",
                "phone": "1234567",
                "company": "Empresa",
                "position": "CTO",
                "linkedin": "",
                "consultant": "Angel Osuna",
            })
        );
    }

    #[test]
    fn test_project_uses_camel_case_keys() {
        let submission = Submission::Project(ProjectSubmission {
            project_name: "Portal".into(),
            project_description: "Portal de clientes".into(),
            service_type: "chatbot".into(),
            budget_range: "5k-15k".into(),
            timeline: "flexible".into(),
            name: "Ana".into(),
            email: "ana@empresa.com".into(),
        });

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["projectName"], "Portal");
        assert_eq!(value["projectDescription"], "Portal de clientes");
        assert_eq!(value["serviceType"], "chatbot");
        assert_eq!(value["budgetRange"], "5k-15k");
        assert_eq!(value["timeline"], "flexible");
        assert_eq!(submission.variant(), FormVariant::Project);
    }
}
