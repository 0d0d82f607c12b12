use crate::{Address, Company, FormField, UserId, UserRecord};

use serde::{Deserialize, Serialize};

/// Raw string values of the profile form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub username: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub company_name: String,
}

impl FormValues {
    /// Pre-fill from a record
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            city: record.city().to_string(),
            phone: record.phone.clone(),
            company_name: record.company_name().to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::City => &self.city,
            FormField::Phone => &self.phone,
            FormField::CompanyName => &self.company_name,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::City => self.city = value,
            FormField::Phone => self.phone = value,
            FormField::CompanyName => self.company_name = value,
        }
    }

    /// Build the full record that replaces the one with `id`
    pub fn to_record(&self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: Address::new(self.city.clone()),
            company: Company::new(self.company_name.clone()),
        }
    }
}
