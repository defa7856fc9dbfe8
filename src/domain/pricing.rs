//! Display price resolution.
//!
//! A car carries two independent price lists: regular prices and discount
//! prices, each keyed by a [`PriceTier`]. [`resolve`] folds both lists into a
//! [`DisplayPriceTable`] holding one price per tier (discounts take
//! precedence) together with a single summary price per list chosen by
//! [`PriceTier::PRIORITY`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Pricing unit under which a car can be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Day,
    Week,
    Trip,
    Hour,
    Month,
    Km,
}

/// Raised when a tier string does not name a known [`PriceTier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown price tier `{0}`")]
pub struct UnknownPriceTier(pub String);

impl PriceTier {
    /// Tiers in the order they appear in a [`DisplayPriceTable`].
    pub const ALL: [PriceTier; 6] = [
        PriceTier::Day,
        PriceTier::Week,
        PriceTier::Km,
        PriceTier::Trip,
        PriceTier::Hour,
        PriceTier::Month,
    ];

    /// Order used to pick the summary price of a list, highest first.
    pub const PRIORITY: [PriceTier; 6] = [
        PriceTier::Month,
        PriceTier::Week,
        PriceTier::Trip,
        PriceTier::Day,
        PriceTier::Hour,
        PriceTier::Km,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Day => "day",
            PriceTier::Week => "week",
            PriceTier::Trip => "trip",
            PriceTier::Hour => "hour",
            PriceTier::Month => "month",
            PriceTier::Km => "km",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = UnknownPriceTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPriceTier(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for PriceTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a stored amount in cents into currency units.
pub fn amount_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2).normalize()
}

/// A single price as read from storage.
///
/// `tier` is kept as the stored string; it is canonicalized during
/// resolution and entries whose tier is unknown are ignored there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceEntry {
    pub tier: String,
    /// Amount in currency units. Never negative.
    pub amount: Decimal,
    /// Minimum rental hours; only regular prices carry it.
    pub min_hours: Option<i32>,
}

impl PriceEntry {
    pub fn regular(tier: impl Into<String>, amount: Decimal, min_hours: i32) -> Self {
        Self {
            tier: tier.into(),
            amount,
            min_hours: Some(min_hours),
        }
    }

    pub fn discount(tier: impl Into<String>, amount: Decimal) -> Self {
        Self {
            tier: tier.into(),
            amount,
            min_hours: None,
        }
    }
}

/// Price shown for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayPrice {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub tier: PriceTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_hours: Option<i32>,
}

/// Per-car price summary embedded in car responses as `display_price`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayPriceTable {
    pub day: Option<DisplayPrice>,
    pub week: Option<DisplayPrice>,
    pub km: Option<DisplayPrice>,
    pub trip: Option<DisplayPrice>,
    pub hour: Option<DisplayPrice>,
    pub month: Option<DisplayPrice>,
    /// Highest priority non-zero regular price.
    pub regular_price_amount: Option<DisplayPrice>,
    /// Highest priority non-zero discount price.
    pub discount_price_amount: Option<DisplayPrice>,
}

impl DisplayPriceTable {
    /// Price displayed for `tier`, if any.
    pub fn tier(&self, tier: PriceTier) -> Option<&DisplayPrice> {
        self.slot(tier).as_ref()
    }

    fn slot(&self, tier: PriceTier) -> &Option<DisplayPrice> {
        match tier {
            PriceTier::Day => &self.day,
            PriceTier::Week => &self.week,
            PriceTier::Km => &self.km,
            PriceTier::Trip => &self.trip,
            PriceTier::Hour => &self.hour,
            PriceTier::Month => &self.month,
        }
    }

    fn slot_mut(&mut self, tier: PriceTier) -> &mut Option<DisplayPrice> {
        match tier {
            PriceTier::Day => &mut self.day,
            PriceTier::Week => &mut self.week,
            PriceTier::Km => &mut self.km,
            PriceTier::Trip => &mut self.trip,
            PriceTier::Hour => &mut self.hour,
            PriceTier::Month => &mut self.month,
        }
    }
}

type TierLookup = HashMap<PriceTier, DisplayPrice>;

/// Resolve the display prices of a car from its regular and discount lists.
pub fn resolve(regular: &[PriceEntry], discount: &[PriceEntry]) -> DisplayPriceTable {
    let discount_by_tier = lookup_by_tier(discount, |tier, entry| DisplayPrice {
        amount: entry.amount,
        tier,
        min_hours: None,
    });
    let regular_by_tier = lookup_by_tier(regular, |tier, entry| DisplayPrice {
        amount: entry.amount,
        tier,
        min_hours: Some(entry.min_hours.unwrap_or(0)),
    });

    // Regular prices first, then every discount laid over them.
    let mut merged: TierLookup = regular_by_tier
        .iter()
        .filter(|(tier, _)| !discount_by_tier.contains_key(tier))
        .map(|(tier, price)| (*tier, *price))
        .collect();
    for (tier, price) in &discount_by_tier {
        merged.insert(*tier, *price);
    }

    let mut table = DisplayPriceTable::default();
    for tier in PriceTier::ALL {
        *table.slot_mut(tier) = merged.get(&tier).copied();
    }

    table.discount_price_amount = select_by_priority(&discount_by_tier);
    table.regular_price_amount = select_by_priority(&regular_by_tier);

    table
}

/// First price in [`PriceTier::PRIORITY`] order with a non-zero amount.
pub fn select_by_priority(lookup: &HashMap<PriceTier, DisplayPrice>) -> Option<DisplayPrice> {
    PriceTier::PRIORITY
        .iter()
        .filter_map(|tier| lookup.get(tier))
        .find(|price| price.amount > Decimal::ZERO)
        .copied()
}

/// Later entries for the same tier replace earlier ones.
fn lookup_by_tier<F>(entries: &[PriceEntry], to_price: F) -> TierLookup
where
    F: Fn(PriceTier, &PriceEntry) -> DisplayPrice,
{
    let mut lookup = TierLookup::with_capacity(entries.len());
    for entry in entries {
        if let Ok(tier) = entry.tier.parse::<PriceTier>() {
            lookup.insert(tier, to_price(tier, entry));
        }
    }
    lookup
}
