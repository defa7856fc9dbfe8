use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a car category such as "SUV" or "Hatchback".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarCategory {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new car category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCarCategory {
    /// Human-readable name of the category.
    pub name: String,
}

impl NewCarCategory {
    /// Construct a new category payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self { name }
    }
}
