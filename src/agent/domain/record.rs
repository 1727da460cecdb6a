use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named voice agent pointing at an external assistant.
///
/// `name` and `created_at` are fixed at creation; only `assistant_id` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub name: String,
    pub assistant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Agent {
    /// Name with hyphens turned into spaces, e.g. `customer-support` -> `customer support`.
    pub fn display_name(&self) -> String {
        self.name.replace('-', " ")
    }

    /// Display name with its first letter upper-cased.
    pub fn title(&self) -> String {
        let display = self.display_name();
        let mut chars = display.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Display name with every word capitalized, e.g. `Customer Support`.
    pub fn heading(&self) -> String {
        self.display_name()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Public path for this agent's page.
    pub fn public_path(&self) -> String {
        format!("/agent/{}", self.name)
    }
}
