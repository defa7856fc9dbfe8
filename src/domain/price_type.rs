use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::pricing::PriceTier;

/// A price tier offered to administrators when entering car prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceType {
    /// Unique identifier of the price type.
    pub id: i32,
    /// Canonical tier name, for example `day`.
    pub type_name: String,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to register a price type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPriceType {
    /// Tier the price type stands for.
    pub tier: PriceTier,
}

impl NewPriceType {
    pub fn new(tier: PriceTier) -> Self {
        Self { tier }
    }
}
