use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::lenient;
use crate::record::{Record, require};

/// Contact book entry. `name` doubles as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
            address: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Case-insensitive substring match on name or phone. An empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&q) || self.phone.to_lowercase().contains(&q)
    }
}

impl Record for Contact {
    const KIND: &'static str = "contact";

    fn validate(&self) -> Result<(), StoreError> {
        const MSG: &str = "Name and Phone are required.";
        require("name", &self.name, MSG)?;
        require("phone", &self.phone, MSG)
    }

    fn label(&self) -> &str {
        &self.name
    }
}
