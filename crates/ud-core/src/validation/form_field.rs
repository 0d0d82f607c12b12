use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Editable fields of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Username,
    Email,
    City,
    Phone,
    CompanyName,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Username,
        FormField::Email,
        FormField::City,
        FormField::Phone,
        FormField::CompanyName,
    ];

    /// Key used on the command line and in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::City => "city",
            Self::Phone => "phone",
            Self::CompanyName => "companyName",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::City => "City",
            Self::Phone => "Phone",
            Self::CompanyName => "Company name",
        }
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "city" => Ok(Self::City),
            "phone" => Ok(Self::Phone),
            "companyName" | "company_name" | "company" => Ok(Self::CompanyName),
            _ => Err(CoreError::unknown_field(s)),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
