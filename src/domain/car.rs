use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::amenity::Amenity;
use crate::domain::category::CarCategory;
use crate::domain::pricing::{self, DisplayPriceTable, PriceEntry, PriceTier};

/// Domain representation of a rentable car together with its relations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    /// Unique identifier of the car.
    pub id: i32,
    /// Display name of the car.
    pub car_name: String,
    /// Optional model designation.
    pub car_model: Option<String>,
    /// File name of the car image, if one has been assigned.
    pub car_image_url: Option<String>,
    /// Identifier of the category the car belongs to.
    pub car_category: Option<i32>,
    /// Inactive cars are hidden from the public listing.
    pub is_active: bool,
    /// Timestamp for when the car record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the car record.
    pub updated_at: NaiveDateTime,
    /// Category referenced by `car_category`.
    pub category: Option<CarCategory>,
    /// Seat count and amenities.
    pub additional_details: Option<CarAdditionalDetail>,
    /// Regular prices, one per tier.
    pub price_details: Vec<CarPriceDetail>,
    /// Discount prices, one per tier.
    pub discount_price_details: Vec<CarDiscountPriceDetail>,
}

impl Car {
    /// Regular prices as resolver input.
    pub fn price_entries(&self) -> Vec<PriceEntry> {
        self.price_details
            .iter()
            .map(CarPriceDetail::to_entry)
            .collect()
    }

    /// Discount prices as resolver input.
    pub fn discount_entries(&self) -> Vec<PriceEntry> {
        self.discount_price_details
            .iter()
            .map(CarDiscountPriceDetail::to_entry)
            .collect()
    }

    /// Resolve the prices shown for this car.
    pub fn display_price(&self) -> DisplayPriceTable {
        pricing::resolve(&self.price_entries(), &self.discount_entries())
    }
}

/// Seat count and amenities attached to a car.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarAdditionalDetail {
    pub id: i32,
    pub car_id: i32,
    pub no_of_seats: i32,
    /// Amenities ordered by name.
    pub amenities: Vec<Amenity>,
    /// Names of `amenities`, in the same order.
    pub amenity_names: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CarAdditionalDetail {
    /// Attach amenities, keeping them and their names ordered by name.
    pub fn with_amenities(mut self, mut amenities: Vec<Amenity>) -> Self {
        amenities.sort_by(|a, b| a.name.cmp(&b.name));
        self.amenity_names = amenities.iter().map(|amenity| amenity.name.clone()).collect();
        self.amenities = amenities;
        self
    }
}

/// Regular price of a car for one tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarPriceDetail {
    pub id: i32,
    pub car_id: i32,
    /// Tier name as stored.
    pub price_type: String,
    /// Minimum rental duration in hours for this price.
    pub min_hours: i32,
    /// Price represented in the smallest currency unit.
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CarPriceDetail {
    pub fn to_entry(&self) -> PriceEntry {
        PriceEntry::regular(
            self.price_type.as_str(),
            pricing::amount_from_cents(self.price_cents),
            self.min_hours,
        )
    }
}

/// Discount price of a car for one tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarDiscountPriceDetail {
    pub id: i32,
    pub car_id: i32,
    /// Tier name as stored.
    pub price_type: String,
    /// Price represented in the smallest currency unit.
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CarDiscountPriceDetail {
    pub fn to_entry(&self) -> PriceEntry {
        PriceEntry::discount(
            self.price_type.as_str(),
            pricing::amount_from_cents(self.price_cents),
        )
    }
}

/// Car representation returned by the API, with resolved display prices.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricedCar {
    #[serde(flatten)]
    pub car: Car,
    pub display_price: DisplayPriceTable,
}

impl From<Car> for PricedCar {
    fn from(car: Car) -> Self {
        let display_price = car.display_price();
        Self { car, display_price }
    }
}

/// Seat count and amenity selection supplied on create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDetailsInput {
    /// Number of seats, at least one.
    pub no_of_seats: i32,
    /// Amenity identifiers; `None` leaves stored amenities untouched on update.
    pub amenity_ids: Option<Vec<i32>>,
}

/// Regular price supplied on create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCarPrice {
    pub tier: PriceTier,
    pub min_hours: i32,
    pub price_cents: i64,
}

/// Discount price supplied on create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCarDiscountPrice {
    pub tier: PriceTier,
    pub price_cents: i64,
}

/// Payload required to insert a new car with its relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub car_name: String,
    pub car_model: Option<String>,
    pub car_image_url: Option<String>,
    pub car_category: Option<i32>,
    pub is_active: bool,
    pub additional_details: Option<CarDetailsInput>,
    pub price_details: Vec<NewCarPrice>,
    pub discount_price_details: Vec<NewCarDiscountPrice>,
}

impl NewCar {
    /// Build an active car payload with no relations attached.
    pub fn new(car_name: impl Into<String>) -> Self {
        Self {
            car_name: car_name.into(),
            car_model: None,
            car_image_url: None,
            car_category: None,
            is_active: true,
            additional_details: None,
            price_details: Vec::new(),
            discount_price_details: Vec::new(),
        }
    }

    pub fn with_model(mut self, car_model: impl Into<String>) -> Self {
        self.car_model = Some(car_model.into());
        self
    }

    pub fn with_image_url(mut self, car_image_url: impl Into<String>) -> Self {
        self.car_image_url = Some(car_image_url.into());
        self
    }

    pub fn with_category(mut self, category_id: i32) -> Self {
        self.car_category = Some(category_id);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_details(mut self, details: CarDetailsInput) -> Self {
        self.additional_details = Some(details);
        self
    }

    pub fn with_prices(mut self, prices: Vec<NewCarPrice>) -> Self {
        self.price_details = prices;
        self
    }

    pub fn with_discount_prices(mut self, prices: Vec<NewCarDiscountPrice>) -> Self {
        self.discount_price_details = prices;
        self
    }

    /// Amenity identifiers referenced by the payload.
    pub fn amenity_ids(&self) -> &[i32] {
        self.additional_details
            .as_ref()
            .and_then(|details| details.amenity_ids.as_deref())
            .unwrap_or(&[])
    }

    /// Tiers used by the regular and discount prices of the payload.
    pub fn price_tiers(&self) -> Vec<PriceTier> {
        self.price_details
            .iter()
            .map(|price| price.tier)
            .chain(self.discount_price_details.iter().map(|price| price.tier))
            .collect()
    }
}

/// Patch data applied when updating an existing car.
///
/// `None` leaves a field or relation untouched. Supplied price lists replace
/// the stored lists wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCar {
    pub car_name: Option<String>,
    pub car_model: Option<String>,
    pub car_image_url: Option<String>,
    pub car_category: Option<i32>,
    pub is_active: Option<bool>,
    pub additional_details: Option<CarDetailsInput>,
    pub price_details: Option<Vec<NewCarPrice>>,
    pub discount_price_details: Option<Vec<NewCarDiscountPrice>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateCar {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCar {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            car_name: None,
            car_model: None,
            car_image_url: None,
            car_category: None,
            is_active: None,
            additional_details: None,
            price_details: None,
            discount_price_details: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn car_name(mut self, car_name: impl Into<String>) -> Self {
        self.car_name = Some(car_name.into());
        self
    }

    pub fn car_model(mut self, car_model: impl Into<String>) -> Self {
        self.car_model = Some(car_model.into());
        self
    }

    pub fn car_image_url(mut self, car_image_url: impl Into<String>) -> Self {
        self.car_image_url = Some(car_image_url.into());
        self
    }

    pub fn car_category(mut self, category_id: i32) -> Self {
        self.car_category = Some(category_id);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn details(mut self, details: CarDetailsInput) -> Self {
        self.additional_details = Some(details);
        self
    }

    pub fn prices(mut self, prices: Vec<NewCarPrice>) -> Self {
        self.price_details = Some(prices);
        self
    }

    pub fn discount_prices(mut self, prices: Vec<NewCarDiscountPrice>) -> Self {
        self.discount_price_details = Some(prices);
        self
    }

    /// Amenity identifiers referenced by the patch.
    pub fn amenity_ids(&self) -> &[i32] {
        self.additional_details
            .as_ref()
            .and_then(|details| details.amenity_ids.as_deref())
            .unwrap_or(&[])
    }

    /// Tiers used by the replacement price lists, if any were supplied.
    pub fn price_tiers(&self) -> Vec<PriceTier> {
        let regular = self.price_details.iter().flatten().map(|price| price.tier);
        let discount = self
            .discount_price_details
            .iter()
            .flatten()
            .map(|price| price.tier);
        regular.chain(discount).collect()
    }
}

/// Query definition used to list cars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarListQuery {
    /// Restrict the result to a single car.
    pub car_id: Option<i32>,
    /// Skip cars flagged as inactive.
    pub active_only: bool,
    /// Skip cars with a non-cancelled booking overlapping `(start, end)`.
    pub available_between: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl CarListQuery {
    /// Construct a query that targets every car.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn car_id(mut self, car_id: i32) -> Self {
        self.car_id = Some(car_id);
        self
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    pub fn available_between(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.available_between = Some((start, end));
        self
    }
}
