use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price_type::NewPriceType;
use crate::domain::pricing::{PriceTier, UnknownPriceTier};

const TYPE_NAME_MAX_LEN: u64 = 50;

/// Result type returned by the price type form helpers.
pub type PriceTypeFormResult<T> = Result<T, PriceTypeFormError>;

/// Errors that can occur while processing price type forms.
#[derive(Debug, Error)]
pub enum PriceTypeFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// Only tiers the display price resolver understands can be registered.
    #[error(transparent)]
    UnknownTier(#[from] UnknownPriceTier),
}

/// Payload accepted when registering a price type.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPriceTypeForm {
    #[validate(length(min = 1, max = TYPE_NAME_MAX_LEN))]
    pub type_name: String,
}

impl AddPriceTypeForm {
    /// Validates the payload and resolves it to a canonical tier.
    pub fn into_new_price_type(self) -> PriceTypeFormResult<NewPriceType> {
        self.validate()?;

        let tier: PriceTier = self.type_name.parse()?;

        Ok(NewPriceType::new(tier))
    }
}
