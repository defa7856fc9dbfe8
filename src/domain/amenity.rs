use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An amenity from the master list (air conditioning, GPS, child seat, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new amenity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAmenity {
    pub name: String,
}

impl NewAmenity {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self { name }
    }
}
