use mockall::mock;

use super::{
    AmenityReader, AmenityWriter, BookingReader, BookingWriter, CarReader, CarWriter,
    CategoryReader, CategoryWriter, CustomerReader, CustomerWriter, PriceTypeReader,
    PriceTypeWriter,
};
use crate::domain::{
    amenity::{Amenity, NewAmenity},
    booking::{Booking, BookingListQuery, NewBooking},
    car::{Car, CarListQuery, NewCar, UpdateCar},
    category::{CarCategory, NewCarCategory},
    customer::{Customer, NewCustomer},
    price_type::{NewPriceType, PriceType},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CarCategory>>;
        fn list_categories(&self) -> RepositoryResult<Vec<CarCategory>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCarCategory) -> RepositoryResult<CarCategory>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub AmenityReader {}

    impl AmenityReader for AmenityReader {
        fn list_amenities(&self) -> RepositoryResult<Vec<Amenity>>;
        fn get_amenities_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Amenity>>;
    }
}

mock! {
    pub AmenityWriter {}

    impl AmenityWriter for AmenityWriter {
        fn create_amenity(&self, new_amenity: &NewAmenity) -> RepositoryResult<Amenity>;
    }
}

mock! {
    pub PriceTypeReader {}

    impl PriceTypeReader for PriceTypeReader {
        fn list_price_types(&self) -> RepositoryResult<Vec<PriceType>>;
    }
}

mock! {
    pub PriceTypeWriter {}

    impl PriceTypeWriter for PriceTypeWriter {
        fn create_price_type(&self, new_price_type: &NewPriceType) -> RepositoryResult<PriceType>;
    }
}

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    }
}

// Car and booking services touch several traits at once, so these mocks
// implement all of them on one object.
mock! {
    pub CarRepository {}

    impl CarReader for CarRepository {
        fn get_car_by_id(&self, id: i32) -> RepositoryResult<Option<Car>>;
        fn list_cars(&self, query: CarListQuery) -> RepositoryResult<Vec<Car>>;
    }

    impl CarWriter for CarRepository {
        fn create_car(&self, new_car: &NewCar) -> RepositoryResult<Car>;
        fn update_car(&self, car_id: i32, updates: &UpdateCar) -> RepositoryResult<Car>;
        fn delete_car(&self, car_id: i32) -> RepositoryResult<()>;
    }

    impl CategoryReader for CarRepository {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CarCategory>>;
        fn list_categories(&self) -> RepositoryResult<Vec<CarCategory>>;
    }

    impl AmenityReader for CarRepository {
        fn list_amenities(&self) -> RepositoryResult<Vec<Amenity>>;
        fn get_amenities_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Amenity>>;
    }

    impl PriceTypeReader for CarRepository {
        fn list_price_types(&self) -> RepositoryResult<Vec<PriceType>>;
    }
}

mock! {
    pub BookingRepository {}

    impl BookingReader for BookingRepository {
        fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
        fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<Booking>>;
    }

    impl BookingWriter for BookingRepository {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
    }

    impl CarReader for BookingRepository {
        fn get_car_by_id(&self, id: i32) -> RepositoryResult<Option<Car>>;
        fn list_cars(&self, query: CarListQuery) -> RepositoryResult<Vec<Car>>;
    }

    impl CustomerReader for BookingRepository {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }
}
