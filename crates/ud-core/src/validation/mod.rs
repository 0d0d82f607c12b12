pub mod form_field;
pub mod form_schema;
pub mod form_values;
pub mod rule;
pub mod validation_errors;
