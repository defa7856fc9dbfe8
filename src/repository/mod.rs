use crate::db::{DbConnection, DbPool};
use crate::domain::amenity::{Amenity, NewAmenity};
use crate::domain::booking::{Booking, BookingListQuery, NewBooking};
use crate::domain::car::{Car, CarListQuery, NewCar, UpdateCar};
use crate::domain::category::{CarCategory, NewCarCategory};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::price_type::{NewPriceType, PriceType};
use crate::repository::errors::RepositoryResult;

pub mod amenity;
pub mod booking;
pub mod car;
pub mod category;
pub mod customer;
pub mod errors;
pub mod price_type;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over cars and their relations.
pub trait CarReader {
    fn get_car_by_id(&self, id: i32) -> RepositoryResult<Option<Car>>;
    fn list_cars(&self, query: CarListQuery) -> RepositoryResult<Vec<Car>>;
}

/// Write operations over cars. Each call runs in one transaction.
pub trait CarWriter {
    fn create_car(&self, new_car: &NewCar) -> RepositoryResult<Car>;
    fn update_car(&self, car_id: i32, updates: &UpdateCar) -> RepositoryResult<Car>;
    fn delete_car(&self, car_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over car categories.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CarCategory>>;
    fn list_categories(&self) -> RepositoryResult<Vec<CarCategory>>;
}

/// Write operations over car categories.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCarCategory) -> RepositoryResult<CarCategory>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over the amenity master list.
pub trait AmenityReader {
    fn list_amenities(&self) -> RepositoryResult<Vec<Amenity>>;
    fn get_amenities_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Amenity>>;
}

/// Write operations over the amenity master list.
pub trait AmenityWriter {
    fn create_amenity(&self, new_amenity: &NewAmenity) -> RepositoryResult<Amenity>;
}

/// Read-only operations over price types.
pub trait PriceTypeReader {
    fn list_price_types(&self) -> RepositoryResult<Vec<PriceType>>;
}

/// Write operations over price types.
pub trait PriceTypeWriter {
    fn create_price_type(&self, new_price_type: &NewPriceType) -> RepositoryResult<PriceType>;
}

/// Read-only operations over customers.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

/// Write operations over customers.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
}

/// Read-only operations over bookings.
pub trait BookingReader {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<Booking>>;
}

/// Write operations over bookings.
pub trait BookingWriter {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
}
