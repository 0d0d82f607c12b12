use serde::{Deserialize, Serialize};

/// Postal address of a user. Only the city is displayed or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
}

impl Address {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}
