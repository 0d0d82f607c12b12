//! Edit form state for a single user.
//!
//! A field is validated when it loses focus (`blur`). Once touched, every
//! further change re-validates it right away. Submitting validates all fields
//! and only writes to the store when none fail.

use crate::{FormField, FormSchema, FormValues, OverlayStore, UserId, UserRecord, ValidationErrors};

use std::collections::BTreeSet;

use log::debug;

/// Result of `EditForm::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record written to the store
    Saved(UserRecord),
    /// Nothing written; one message per invalid field
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

#[derive(Debug, Clone)]
pub struct EditForm {
    user_id: UserId,
    values: FormValues,
    touched: BTreeSet<FormField>,
    errors: ValidationErrors,
    schema: FormSchema,
}

impl EditForm {
    /// Pre-fill from the record currently shown for the user
    pub fn new(record: &UserRecord, schema: FormSchema) -> Self {
        Self {
            user_id: record.id,
            values: FormValues::from_record(record),
            touched: BTreeSet::new(),
            errors: ValidationErrors::new(),
            schema,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Change a value. Touched fields are re-validated immediately.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Option<&str> {
        self.values.set(field, value);
        if self.is_touched(field) {
            self.revalidate(field);
        }
        self.error(field)
    }

    /// Mark a field touched and validate it
    pub fn blur(&mut self, field: FormField) -> Option<&str> {
        self.touched.insert(field);
        self.revalidate(field);
        self.error(field)
    }

    /// Validate everything; on success store the full record as the user's
    /// local edit.
    pub fn submit(&mut self, store: &mut OverlayStore) -> SubmitOutcome {
        self.touched.extend(FormField::ALL);
        self.errors = self.schema.validate(&self.values);

        if !self.errors.is_empty() {
            debug!(
                "Rejected form for user {}: {} invalid field(s)",
                self.user_id,
                self.errors.len()
            );
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let record = self.values.to_record(self.user_id);
        store.upsert_edited_user(record.clone());
        SubmitOutcome::Saved(record)
    }

    fn revalidate(&mut self, field: FormField) {
        let message = self.schema.validate_field(field, self.values.get(field));
        self.errors.set(field, message);
    }
}
