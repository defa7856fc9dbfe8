use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::car::{
    CarDetailsInput, CarListQuery, NewCar, NewCarDiscountPrice, NewCarPrice, UpdateCar,
};
use crate::domain::pricing::PriceTier;
use crate::forms::{
    InvalidAmount, amount_to_cents, parse_datetime, sanitize_inline_text, sanitize_optional_text,
};

/// Maximum length allowed for car names and models.
const NAME_MAX_LEN: usize = 100;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum length of a stored image file name.
const IMAGE_MAX_LEN_VALIDATOR: u64 = 255;

/// Result type returned by the car form helpers.
pub type CarFormResult<T> = Result<T, CarFormError>;

/// Errors that can occur while processing car forms.
#[derive(Debug, Error)]
pub enum CarFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("car name cannot be empty")]
    EmptyName,
    #[error("unknown price type `{0}`")]
    UnknownPriceType(String),
    #[error("min_hours must not be negative, got {0}")]
    NegativeMinHours(i32),
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),
    #[error("invalid {field} `{value}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("journey_end_date must be after journey_start_date")]
    EndBeforeStart,
}

/// Seat count and amenity selection nested in car payloads.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarDetailsPayload {
    #[validate(range(min = 1))]
    pub no_of_seats: i32,
    /// Amenity identifiers; omitted keeps the stored selection on update.
    #[serde(default)]
    pub amenities: Option<Vec<i32>>,
}

impl From<CarDetailsPayload> for CarDetailsInput {
    fn from(payload: CarDetailsPayload) -> Self {
        Self {
            no_of_seats: payload.no_of_seats,
            amenity_ids: payload.amenities,
        }
    }
}

/// Regular price entry nested in car payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceDetailPayload {
    pub price_type: String,
    #[serde(default)]
    pub min_hours: Option<i32>,
    pub price: Decimal,
}

impl PriceDetailPayload {
    fn into_price(self) -> CarFormResult<NewCarPrice> {
        let tier = parse_entry_tier(&self.price_type)?;
        let min_hours = self.min_hours.unwrap_or(0);
        if min_hours < 0 {
            return Err(CarFormError::NegativeMinHours(min_hours));
        }

        Ok(NewCarPrice {
            tier,
            min_hours,
            price_cents: amount_to_cents(self.price)?,
        })
    }
}

/// Discount price entry nested in car payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountPriceDetailPayload {
    pub price_type: String,
    pub price: Decimal,
}

impl DiscountPriceDetailPayload {
    fn into_price(self) -> CarFormResult<NewCarDiscountPrice> {
        Ok(NewCarDiscountPrice {
            tier: parse_entry_tier(&self.price_type)?,
            price_cents: amount_to_cents(self.price)?,
        })
    }
}

/// Payload accepted when creating a car.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCarForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub car_name: String,
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub car_model: Option<String>,
    /// File name of an already stored image.
    #[validate(length(max = IMAGE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub car_image_url: Option<String>,
    #[serde(default)]
    pub car_category: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[validate(nested)]
    #[serde(default)]
    pub additional_details: Option<CarDetailsPayload>,
    #[serde(default)]
    pub price_details: Vec<PriceDetailPayload>,
    #[serde(default)]
    pub discount_price_details: Vec<DiscountPriceDetailPayload>,
}

impl AddCarForm {
    /// Validates and sanitizes the payload into a domain `NewCar`.
    ///
    /// Existence of the referenced category and amenities is checked by the
    /// service.
    pub fn into_new_car(self) -> CarFormResult<NewCar> {
        self.validate()?;

        let car_name = sanitize_inline_text(&self.car_name);
        if car_name.is_empty() {
            return Err(CarFormError::EmptyName);
        }

        let prices = convert_prices(self.price_details)?;
        let discounts = convert_discount_prices(self.discount_price_details)?;

        let mut new_car = NewCar::new(car_name)
            .active(self.is_active.unwrap_or(true))
            .with_prices(prices)
            .with_discount_prices(discounts);

        if let Some(model) = sanitize_optional_text(self.car_model.as_deref()) {
            new_car = new_car.with_model(model);
        }
        if let Some(image) = sanitize_optional_text(self.car_image_url.as_deref()) {
            new_car = new_car.with_image_url(image);
        }
        if let Some(category_id) = self.car_category {
            new_car = new_car.with_category(category_id);
        }
        if let Some(details) = self.additional_details {
            new_car = new_car.with_details(details.into());
        }

        Ok(new_car)
    }
}

/// Payload accepted when updating a car. Omitted fields stay untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCarForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub car_name: Option<String>,
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub car_model: Option<String>,
    #[validate(length(max = IMAGE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub car_image_url: Option<String>,
    #[serde(default)]
    pub car_category: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[validate(nested)]
    #[serde(default)]
    pub additional_details: Option<CarDetailsPayload>,
    #[serde(default)]
    pub price_details: Option<Vec<PriceDetailPayload>>,
    #[serde(default)]
    pub discount_price_details: Option<Vec<DiscountPriceDetailPayload>>,
}

impl UpdateCarForm {
    /// Validates and sanitizes the payload into a domain `UpdateCar`.
    pub fn into_update_car(self) -> CarFormResult<UpdateCar> {
        self.validate()?;

        let mut updates = UpdateCar::new();

        if let Some(name) = self.car_name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(CarFormError::EmptyName);
            }
            updates = updates.car_name(name);
        }
        if let Some(model) = self.car_model.as_deref() {
            updates = updates.car_model(sanitize_inline_text(model));
        }
        if let Some(image) = self.car_image_url.as_deref() {
            updates = updates.car_image_url(sanitize_inline_text(image));
        }
        if let Some(category_id) = self.car_category {
            updates = updates.car_category(category_id);
        }
        if let Some(is_active) = self.is_active {
            updates = updates.active(is_active);
        }
        if let Some(details) = self.additional_details {
            updates = updates.details(details.into());
        }
        if let Some(prices) = self.price_details {
            updates = updates.prices(convert_prices(prices)?);
        }
        if let Some(prices) = self.discount_price_details {
            updates = updates.discount_prices(convert_discount_prices(prices)?);
        }

        Ok(updates)
    }
}

/// Query string accepted by the public car listing.
#[derive(Debug, Default, Deserialize)]
pub struct CarListParams {
    pub car_id: Option<i32>,
    pub journey_start_date: Option<String>,
    pub journey_end_date: Option<String>,
}

impl CarListParams {
    /// Build a listing query over active cars.
    ///
    /// The availability filter applies only when both dates are supplied.
    pub fn into_query(self) -> CarFormResult<CarListQuery> {
        let start = parse_optional_date(self.journey_start_date.as_deref(), "journey_start_date")?;
        let end = parse_optional_date(self.journey_end_date.as_deref(), "journey_end_date")?;

        let mut query = CarListQuery::new().active_only();
        if let Some(car_id) = self.car_id {
            query = query.car_id(car_id);
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                return Err(CarFormError::EndBeforeStart);
            }
            query = query.available_between(start, end);
        }

        Ok(query)
    }
}

/// Whether the tier is registered as a price type is checked by the service.
fn parse_entry_tier(value: &str) -> CarFormResult<PriceTier> {
    value
        .parse::<PriceTier>()
        .map_err(|_| CarFormError::UnknownPriceType(value.to_string()))
}

fn parse_optional_date(
    value: Option<&str>,
    field: &'static str,
) -> CarFormResult<Option<chrono::NaiveDateTime>> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(raw) => parse_datetime(raw)
            .map(Some)
            .ok_or_else(|| CarFormError::InvalidDate {
                field,
                value: raw.to_string(),
            }),
        None => Ok(None),
    }
}

fn convert_prices(prices: Vec<PriceDetailPayload>) -> CarFormResult<Vec<NewCarPrice>> {
    prices
        .into_iter()
        .map(PriceDetailPayload::into_price)
        .collect()
}

fn convert_discount_prices(
    prices: Vec<DiscountPriceDetailPayload>,
) -> CarFormResult<Vec<NewCarDiscountPrice>> {
    prices
        .into_iter()
        .map(DiscountPriceDetailPayload::into_price)
        .collect()
}
