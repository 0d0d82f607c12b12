use serde::{Deserialize, Serialize};

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
