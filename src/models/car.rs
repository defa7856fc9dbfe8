use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::car::{
    Car as DomainCar, CarAdditionalDetail as DomainCarAdditionalDetail,
    CarDiscountPriceDetail as DomainCarDiscountPriceDetail,
    CarPriceDetail as DomainCarPriceDetail, NewCar as DomainNewCar,
    NewCarDiscountPrice as DomainNewCarDiscountPrice, NewCarPrice as DomainNewCarPrice,
    UpdateCar as DomainUpdateCar,
};
use crate::domain::category::CarCategory as DomainCarCategory;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cars)]
pub struct Car {
    pub id: i32,
    pub car_name: String,
    pub car_model: Option<String>,
    pub car_image_url: Option<String>,
    pub car_category: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::car_additional_details)]
#[diesel(belongs_to(Car, foreign_key = car_id))]
pub struct CarAdditionalDetail {
    pub id: i32,
    pub car_id: i32,
    pub no_of_seats: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::car_price_details)]
#[diesel(belongs_to(Car, foreign_key = car_id))]
pub struct CarPriceDetail {
    pub id: i32,
    pub car_id: i32,
    pub price_type: String,
    pub min_hours: i32,
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::car_discount_price_details)]
#[diesel(belongs_to(Car, foreign_key = car_id))]
pub struct CarDiscountPriceDetail {
    pub id: i32,
    pub car_id: i32,
    pub price_type: String,
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cars)]
pub struct NewCar<'a> {
    pub car_name: &'a str,
    pub car_model: Option<&'a str>,
    pub car_image_url: Option<&'a str>,
    pub car_category: Option<i32>,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::cars)]
pub struct UpdateCar<'a> {
    pub car_name: Option<&'a str>,
    pub car_model: Option<&'a str>,
    pub car_image_url: Option<&'a str>,
    pub car_category: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::car_additional_details)]
pub struct NewCarAdditionalDetail {
    pub car_id: i32,
    pub no_of_seats: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::car_amenities)]
pub struct NewCarAmenity {
    pub car_id: i32,
    pub amenity_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::car_price_details)]
pub struct NewCarPriceDetail {
    pub car_id: i32,
    pub price_type: &'static str,
    pub min_hours: i32,
    pub price_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::car_discount_price_details)]
pub struct NewCarDiscountPriceDetail {
    pub car_id: i32,
    pub price_type: &'static str,
    pub price_cents: i64,
}

impl Car {
    /// Assemble the domain car from its row and already loaded relations.
    pub fn into_domain(
        self,
        category: Option<DomainCarCategory>,
        additional_details: Option<DomainCarAdditionalDetail>,
        price_details: Vec<DomainCarPriceDetail>,
        discount_price_details: Vec<DomainCarDiscountPriceDetail>,
    ) -> DomainCar {
        DomainCar {
            id: self.id,
            car_name: self.car_name,
            car_model: self.car_model,
            car_image_url: self.car_image_url,
            car_category: self.car_category,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            category,
            additional_details,
            price_details,
            discount_price_details,
        }
    }
}

impl From<CarAdditionalDetail> for DomainCarAdditionalDetail {
    fn from(value: CarAdditionalDetail) -> Self {
        Self {
            id: value.id,
            car_id: value.car_id,
            no_of_seats: value.no_of_seats,
            amenities: Vec::new(),
            amenity_names: Vec::new(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<CarPriceDetail> for DomainCarPriceDetail {
    fn from(value: CarPriceDetail) -> Self {
        Self {
            id: value.id,
            car_id: value.car_id,
            price_type: value.price_type,
            min_hours: value.min_hours,
            price_cents: value.price_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<CarDiscountPriceDetail> for DomainCarDiscountPriceDetail {
    fn from(value: CarDiscountPriceDetail) -> Self {
        Self {
            id: value.id,
            car_id: value.car_id,
            price_type: value.price_type,
            price_cents: value.price_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCar> for NewCar<'a> {
    fn from(value: &'a DomainNewCar) -> Self {
        Self {
            car_name: value.car_name.as_str(),
            car_model: value.car_model.as_deref(),
            car_image_url: value.car_image_url.as_deref(),
            car_category: value.car_category,
            is_active: value.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateCar> for UpdateCar<'a> {
    fn from(value: &'a DomainUpdateCar) -> Self {
        Self {
            car_name: value.car_name.as_deref(),
            car_model: value.car_model.as_deref(),
            car_image_url: value.car_image_url.as_deref(),
            car_category: value.car_category,
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}

impl NewCarPriceDetail {
    pub fn from_domain(car_id: i32, value: &DomainNewCarPrice) -> Self {
        Self {
            car_id,
            price_type: value.tier.as_str(),
            min_hours: value.min_hours,
            price_cents: value.price_cents,
        }
    }
}

impl NewCarDiscountPriceDetail {
    pub fn from_domain(car_id: i32, value: &DomainNewCarDiscountPrice) -> Self {
        Self {
            car_id,
            price_type: value.tier.as_str(),
            price_cents: value.price_cents,
        }
    }
}
