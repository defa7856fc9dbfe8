pub mod amenity;
pub mod booking;
pub mod car;
pub mod category;
pub mod customer;
pub mod price_type;
pub mod pricing;
