pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod amenities;
pub mod bookings;
pub mod cars;
pub mod categories;
pub mod customers;
pub mod price_types;
