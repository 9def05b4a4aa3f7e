use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A saved customer. The name is the identity, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: non_blank(email),
            address: non_blank(address),
        }
    }

    /// Lowercased name used for matching and de-duplication.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.key() == name_key(name)
    }

    /// Re-applies the blank-means-absent rule to data that came from outside
    /// (old storage, backup files).
    pub fn normalized(self) -> Self {
        Self::new(self.name, self.email, self.address)
    }
}

pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Registry ordering: case-insensitive by name, original spelling breaks ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a)
        .cmp(&name_key(b))
        .then_with(|| a.cmp(b))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
