//! Rule table for the profile form.
//!
//! Rules are data: each field owns an ordered list of `FieldRule`s and a
//! single generic evaluator walks them. The first failing rule of a field
//! supplies that field's message.

use crate::{FieldRule, FormField, FormValues, Rule, ValidationErrors};

use ud_config::ValidationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<(FormField, Vec<FieldRule>)>,
}

impl FormSchema {
    pub fn new(config: &ValidationConfig) -> Self {
        let (min, max) = (config.min_length, config.max_length);

        let fields = FormField::ALL
            .iter()
            .map(|field| (*field, Self::rules_for_field(*field, min, max)))
            .collect();

        Self { fields }
    }

    fn rules_for_field(field: FormField, min: usize, max: usize) -> Vec<FieldRule> {
        let label = field.label();
        let required = FieldRule::new(Rule::Required, format!("{label} is required."));

        match field {
            FormField::Email => vec![
                required,
                FieldRule::new(Rule::Email, "Enter a valid email address."),
            ],
            FormField::Phone => vec![
                required,
                FieldRule::new(Rule::DigitsOnly, "Phone must contain only digits."),
            ],
            FormField::Name | FormField::Username | FormField::City | FormField::CompanyName => {
                vec![
                    required,
                    FieldRule::new(
                        Rule::MinChars(min),
                        format!("{label} must contain at least {min} characters."),
                    ),
                    FieldRule::new(
                        Rule::MaxChars(max),
                        format!("{label} must not exceed {max} characters."),
                    ),
                ]
            }
        }
    }

    pub fn rules(&self, field: FormField) -> &[FieldRule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Message of the first rule `value` violates, if any
    pub fn validate_field(&self, field: FormField, value: &str) -> Option<String> {
        self.rules(field)
            .iter()
            .find(|field_rule| !field_rule.rule.check(value))
            .map(|field_rule| field_rule.message.clone())
    }

    /// Check every field independently
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, _) in &self.fields {
            errors.set(*field, self.validate_field(*field, values.get(*field)));
        }
        errors
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}
