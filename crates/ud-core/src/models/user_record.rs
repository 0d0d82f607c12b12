//! User record as served by the remote API.

use crate::{Address, Company, UserId};

use serde::{Deserialize, Serialize};

/// A user profile. Fetched records are never mutated in place; a local edit
/// is a whole new record stored in the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    /// Missing in the payload decodes to an empty city
    #[serde(default)]
    pub address: Address,
    /// Missing in the payload decodes to an empty company name
    #[serde(default)]
    pub company: Company,
}

impl UserRecord {
    pub fn city(&self) -> &str {
        &self.address.city
    }

    pub fn company_name(&self) -> &str {
        &self.company.name
    }
}
