//! Field tables, option lists and step layouts for each form variant

use super::rules::{Rule, SelectOption};
use super::{FieldSpec, StepDefinition};

macro_rules! same_label {
    ($($name:literal),* $(,)?) => {
        &[$(SelectOption { value: $name, label: $name }),*]
    };
}

pub const CONSULTANTS: &[SelectOption] = same_label![
    "Isaac Rodríguez",
    "Guillermo Sanchez",
    "Andres Fornerino",
    "Francisco Roomer",
    "Douglas Vasquez",
    "Ricardo Martinez",
    "Angel Osuna",
    "Juan Figuera",
    "José Alejandro",
    "Eulices Mendoza",
    "Diego Hidalgo",
    "Christian Vilera",
    "Rafael Carrero",
    "Rodrigo Massa",
];

pub const SERVICE_TYPES: &[SelectOption] = &[
    SelectOption {
        value: "web-development",
        label: "Desarrollo Web",
    },
    SelectOption {
        value: "mobile-app",
        label: "Aplicación Móvil",
    },
    SelectOption {
        value: "ai-automation",
        label: "Automatización con IA",
    },
    SelectOption {
        value: "chatbot",
        label: "Chatbot / Asistente Virtual",
    },
    SelectOption {
        value: "data-analytics",
        label: "Análisis de Datos",
    },
    SelectOption {
        value: "consulting",
        label: "Consultoría Tecnológica",
    },
];

pub const BUDGET_RANGES: &[SelectOption] = &[
    SelectOption {
        value: "less-5k",
        label: "Menos de $5,000",
    },
    SelectOption {
        value: "5k-15k",
        label: "$5,000 - $15,000",
    },
    SelectOption {
        value: "15k-30k",
        label: "$15,000 - $30,000",
    },
    SelectOption {
        value: "30k-50k",
        label: "$30,000 - $50,000",
    },
    SelectOption {
        value: "50k-100k",
        label: "$50,000 - $100,000",
    },
    SelectOption {
        value: "more-100k",
        label: "Más de $100,000",
    },
];

pub const TIMELINES: &[SelectOption] = &[
    SelectOption {
        value: "urgent",
        label: "Urgente (menos de 2 semanas)",
    },
    SelectOption {
        value: "1-month",
        label: "1 mes",
    },
    SelectOption {
        value: "1-3-months",
        label: "1 - 3 meses",
    },
    SelectOption {
        value: "3-6-months",
        label: "3 - 6 meses",
    },
    SelectOption {
        value: "6-months-plus",
        label: "Más de 6 meses",
    },
    SelectOption {
        value: "flexible",
        label: "Flexible",
    },
];

const NAME: FieldSpec = FieldSpec {
    name: "name",
    label: "Nombre Completo *",
    placeholder: "Tu nombre completo",
    multiline: false,
    rule: Rule::Length {
        min: 2,
        max: 100,
        too_short: "El nombre debe tener al menos 2 caracteres",
        too_long: "El nombre debe tener menos de 100 caracteres",
    },
};

const EMAIL: FieldSpec = FieldSpec {
    name: "email",
    label: "Correo Electrónico Profesional *",
    placeholder: "tu@empresa.com",
    multiline: false,
    rule: Rule::Email {
        max: 255,
        invalid: "Correo electrónico inválido",
        too_long: "El correo debe tener menos de 255 caracteres",
    },
};

pub(super) const CONTACT_FIELDS: &[FieldSpec] = &[
    NAME,
    EMAIL,
    FieldSpec {
        name: "phone",
        label: "Número de Teléfono *",
        placeholder: "+58 412 1234567",
        multiline: false,
        rule: Rule::Length {
            min: 7,
            max: 20,
            too_short: "El número de teléfono debe tener al menos 7 caracteres",
            too_long: "El número de teléfono debe tener menos de 20 caracteres",
        },
    },
    FieldSpec {
        name: "company",
        label: "Nombre de Empresa *",
        placeholder: "Nombre de tu empresa",
        multiline: false,
        rule: Rule::Length {
            min: 2,
            max: 100,
            too_short: "El nombre de la empresa debe tener al menos 2 caracteres",
            too_long: "El nombre de la empresa debe tener menos de 100 caracteres",
        },
    },
    FieldSpec {
        name: "position",
        label: "Cargo/Puesto dentro de la Empresa *",
        placeholder: "Tu cargo o puesto",
        multiline: false,
        rule: Rule::Length {
            min: 2,
            max: 100,
            too_short: "El cargo debe tener al menos 2 caracteres",
            too_long: "El cargo debe tener menos de 100 caracteres",
        },
    },
    FieldSpec {
        name: "linkedin",
        label: "Enlace a Perfil de LinkedIn (Opcional)",
        placeholder: "https://linkedin.com/in/tu-perfil",
        multiline: false,
        rule: Rule::OptionalUrl {
            invalid: "Debe ser una URL válida",
        },
    },
    FieldSpec {
        name: "consultant",
        label: "Consultor que te Atendió *",
        placeholder: "Selecciona el consultor",
        multiline: false,
        rule: Rule::OneOf {
            options: CONSULTANTS,
            required: "Selecciona un consultor",
            invalid: "Consultor no válido",
        },
    },
];

pub(super) const CONTACT_STEPS: &[StepDefinition] = &[StepDefinition {
    label: "Información de Contacto",
    fields: &[
        "name",
        "email",
        "phone",
        "company",
        "position",
        "linkedin",
        "consultant",
    ],
}];

pub(super) const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "projectName",
        label: "Nombre del Proyecto *",
        placeholder: "Ej. Plataforma de reservas",
        multiline: false,
        rule: Rule::Length {
            min: 3,
            max: 100,
            too_short: "El nombre del proyecto debe tener al menos 3 caracteres",
            too_long: "El nombre del proyecto debe tener menos de 100 caracteres",
        },
    },
    FieldSpec {
        name: "projectDescription",
        label: "Descripción del Proyecto *",
        placeholder: "Cuéntanos qué necesitas",
        multiline: true,
        rule: Rule::Length {
            min: 10,
            max: 1000,
            too_short: "La descripción debe tener al menos 10 caracteres",
            too_long: "La descripción debe tener menos de 1000 caracteres",
        },
    },
    FieldSpec {
        name: "serviceType",
        label: "Tipo de Servicio *",
        placeholder: "Selecciona un servicio",
        multiline: false,
        rule: Rule::OneOf {
            options: SERVICE_TYPES,
            required: "Selecciona un tipo de servicio",
            invalid: "Tipo de servicio no válido",
        },
    },
    FieldSpec {
        name: "budgetRange",
        label: "Rango de Presupuesto *",
        placeholder: "Selecciona un rango",
        multiline: false,
        rule: Rule::OneOf {
            options: BUDGET_RANGES,
            required: "Selecciona un rango de presupuesto",
            invalid: "Rango de presupuesto no válido",
        },
    },
    FieldSpec {
        name: "timeline",
        label: "Plazo de Entrega *",
        placeholder: "Selecciona un plazo",
        multiline: false,
        rule: Rule::OneOf {
            options: TIMELINES,
            required: "Selecciona un plazo",
            invalid: "Plazo no válido",
        },
    },
    NAME,
    EMAIL,
];

pub(super) const PROJECT_STEPS: &[StepDefinition] = &[
    StepDefinition {
        label: "Proyecto",
        fields: &["projectName", "projectDescription", "serviceType"],
    },
    StepDefinition {
        label: "Presupuesto",
        fields: &["budgetRange"],
    },
    StepDefinition {
        label: "Plazos",
        fields: &["timeline"],
    },
    StepDefinition {
        label: "Contacto",
        fields: &["name", "email"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_values(options: &[SelectOption]) {
        let values: HashSet<_> = options.iter().map(|o| o.value).collect();
        assert_eq!(values.len(), options.len());
    }

    #[test]
    fn test_option_list_sizes() {
        assert_eq!(CONSULTANTS.len(), 14);
        assert_eq!(SERVICE_TYPES.len(), 6);
        assert_eq!(BUDGET_RANGES.len(), 6);
        assert_eq!(TIMELINES.len(), 6);
    }

    #[test]
    fn test_option_values_are_unique() {
        assert_unique_values(CONSULTANTS);
        assert_unique_values(SERVICE_TYPES);
        assert_unique_values(BUDGET_RANGES);
        assert_unique_values(TIMELINES);
    }

    #[test]
    fn test_consultants_use_name_as_value() {
        assert!(CONSULTANTS.iter().all(|o| o.value == o.label));
    }

    #[test]
    fn test_budget_ranges_include_literal_bucket() {
        assert!(BUDGET_RANGES.iter().any(|o| o.value == "5k-15k"));
    }

    #[test]
    fn test_every_step_field_is_declared() {
        for (steps, fields) in [
            (CONTACT_STEPS, CONTACT_FIELDS),
            (PROJECT_STEPS, PROJECT_FIELDS),
        ] {
            for step in steps {
                for name in step.fields {
                    assert!(
                        fields.iter().any(|f| f.name == *name),
                        "step '{}' names undeclared field '{}'",
                        step.label,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_steps_cover_every_field_once() {
        for (steps, fields) in [
            (CONTACT_STEPS, CONTACT_FIELDS),
            (PROJECT_STEPS, PROJECT_FIELDS),
        ] {
            let mut seen: Vec<&str> = steps.iter().flat_map(|s| s.fields.iter().copied()).collect();
            seen.sort_unstable();
            let mut declared: Vec<&str> = fields.iter().map(|f| f.name).collect();
            declared.sort_unstable();
            assert_eq!(seen, declared);
        }
    }
}
