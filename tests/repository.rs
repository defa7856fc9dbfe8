use chrono::{NaiveDate, NaiveDateTime};

use car_rental_admin::domain::amenity::NewAmenity;
use car_rental_admin::domain::booking::{BookingListQuery, BookingStatus, NewBooking};
use car_rental_admin::domain::car::{
    CarDetailsInput, CarListQuery, NewCar, NewCarDiscountPrice, NewCarPrice, UpdateCar,
};
use car_rental_admin::domain::category::NewCarCategory;
use car_rental_admin::domain::customer::{Gender, NewCustomer};
use car_rental_admin::domain::price_type::NewPriceType;
use car_rental_admin::domain::pricing::{PriceTier, amount_from_cents};
use car_rental_admin::repository::errors::RepositoryError;
use car_rental_admin::repository::{
    AmenityReader, AmenityWriter, BookingReader, BookingWriter, CarReader, CarWriter,
    CategoryReader, CategoryWriter, CustomerReader, CustomerWriter, DieselRepository,
    PriceTypeReader, PriceTypeWriter,
};

mod common;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap()
}

fn day_price(price_cents: i64) -> NewCarPrice {
    NewCarPrice {
        tier: PriceTier::Day,
        min_hours: 0,
        price_cents,
    }
}

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new("test_category_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let suv = repo.create_category(&NewCarCategory::new("SUV")).unwrap();
    repo.create_category(&NewCarCategory::new("Hatchback"))
        .unwrap();

    let names: Vec<String> = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, vec!["Hatchback", "SUV"]);

    let err = repo
        .create_category(&NewCarCategory::new("SUV"))
        .expect_err("expected duplicate name to fail");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    assert_eq!(
        repo.get_category_by_id(suv.id).unwrap().map(|c| c.name),
        Some("SUV".to_string())
    );

    repo.delete_category(suv.id).unwrap();
    assert!(repo.get_category_by_id(suv.id).unwrap().is_none());

    let err = repo
        .delete_category(suv.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_amenity_and_price_type_repositories() {
    let test_db = common::TestDb::new("test_amenity_and_price_type_repositories.db");
    let repo = DieselRepository::new(test_db.pool());

    let gps = repo.create_amenity(&NewAmenity::new("GPS")).unwrap();
    let ac = repo
        .create_amenity(&NewAmenity::new("Air Conditioning"))
        .unwrap();

    let listed: Vec<i32> = repo
        .list_amenities()
        .unwrap()
        .into_iter()
        .map(|amenity| amenity.id)
        .collect();
    assert_eq!(listed, vec![ac.id, gps.id]);

    let found = repo.get_amenities_by_ids(&[gps.id, 999]).unwrap();
    assert_eq!(found.len(), 1);
    assert!(repo.get_amenities_by_ids(&[]).unwrap().is_empty());

    let err = repo
        .create_amenity(&NewAmenity::new("GPS"))
        .expect_err("expected duplicate amenity to fail");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let hour = repo
        .create_price_type(&NewPriceType::new(PriceTier::Hour))
        .unwrap();
    assert_eq!(hour.type_name, "hour");
    assert_eq!(repo.list_price_types().unwrap().len(), 4);

    let err = repo
        .create_price_type(&NewPriceType::new(PriceTier::Day))
        .expect_err("expected seeded tier to be unique");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_car_repository_create_loads_relations() {
    let test_db = common::TestDb::new("test_car_repository_create_loads_relations.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&NewCarCategory::new("Sedan")).unwrap();
    let gps = repo.create_amenity(&NewAmenity::new("GPS")).unwrap();
    let ac = repo
        .create_amenity(&NewAmenity::new("Air Conditioning"))
        .unwrap();

    let new_car = NewCar::new("City")
        .with_model("ZX")
        .with_image_url("city.png")
        .with_category(category.id)
        .with_details(CarDetailsInput {
            no_of_seats: 5,
            amenity_ids: Some(vec![gps.id, ac.id, gps.id]),
        })
        .with_prices(vec![
            day_price(10_000),
            NewCarPrice {
                tier: PriceTier::Week,
                min_hours: 24,
                price_cents: 50_000,
            },
        ])
        .with_discount_prices(vec![NewCarDiscountPrice {
            tier: PriceTier::Day,
            price_cents: 8_000,
        }]);

    let car = repo.create_car(&new_car).unwrap();

    assert_eq!(car.car_name, "City");
    assert!(car.is_active);
    assert_eq!(car.category.as_ref().map(|c| c.name.as_str()), Some("Sedan"));
    let details = car.additional_details.as_ref().unwrap();
    assert_eq!(details.no_of_seats, 5);
    assert_eq!(details.amenity_names, vec!["Air Conditioning", "GPS"]);
    assert_eq!(car.price_details.len(), 2);
    assert_eq!(car.discount_price_details.len(), 1);

    let display = car.display_price();
    assert_eq!(display.day.map(|price| price.amount), Some(amount_from_cents(8_000)));
    assert_eq!(display.week.map(|price| price.amount), Some(amount_from_cents(50_000)));
    assert_eq!(
        display.regular_price_amount.map(|price| price.tier),
        Some(PriceTier::Week)
    );

    let loaded = repo.get_car_by_id(car.id).unwrap().unwrap();
    assert_eq!(loaded, car);
}

#[test]
fn test_car_repository_update_replaces_supplied_lists_only() {
    let test_db = common::TestDb::new("test_car_repository_update_replaces_supplied_lists_only.db");
    let repo = DieselRepository::new(test_db.pool());

    let gps = repo.create_amenity(&NewAmenity::new("GPS")).unwrap();
    let ac = repo
        .create_amenity(&NewAmenity::new("Air Conditioning"))
        .unwrap();

    let car = repo
        .create_car(
            &NewCar::new("Alto")
                .with_prices(vec![day_price(9_000)])
                .with_discount_prices(vec![NewCarDiscountPrice {
                    tier: PriceTier::Day,
                    price_cents: 7_000,
                }]),
        )
        .unwrap();
    assert!(car.additional_details.is_none());

    // Details are inserted on first update, prices untouched.
    let updated = repo
        .update_car(
            car.id,
            &UpdateCar::new()
                .car_name("Alto K10")
                .details(CarDetailsInput {
                    no_of_seats: 4,
                    amenity_ids: Some(vec![gps.id]),
                }),
        )
        .unwrap();
    assert_eq!(updated.car_name, "Alto K10");
    assert_eq!(updated.price_details.len(), 1);
    assert_eq!(updated.discount_price_details.len(), 1);
    assert_eq!(
        updated.additional_details.as_ref().map(|d| d.amenity_names.clone()),
        Some(vec!["GPS".to_string()])
    );

    // Seats change; omitted amenity list keeps the stored selection.
    let updated = repo
        .update_car(
            car.id,
            &UpdateCar::new().details(CarDetailsInput {
                no_of_seats: 5,
                amenity_ids: None,
            }),
        )
        .unwrap();
    let details = updated.additional_details.as_ref().unwrap();
    assert_eq!(details.no_of_seats, 5);
    assert_eq!(details.amenities.len(), 1);

    // Supplied lists replace the stored ones wholesale.
    let updated = repo
        .update_car(
            car.id,
            &UpdateCar::new()
                .prices(vec![day_price(9_500), NewCarPrice {
                    tier: PriceTier::Trip,
                    min_hours: 0,
                    price_cents: 3_000,
                }])
                .discount_prices(Vec::new())
                .details(CarDetailsInput {
                    no_of_seats: 5,
                    amenity_ids: Some(vec![ac.id]),
                }),
        )
        .unwrap();
    assert_eq!(updated.price_details.len(), 2);
    assert!(updated.discount_price_details.is_empty());
    assert_eq!(
        updated.additional_details.as_ref().map(|d| d.amenity_names.clone()),
        Some(vec!["Air Conditioning".to_string()])
    );
    assert_eq!(
        updated.display_price().day.map(|price| price.amount),
        Some(amount_from_cents(9_500))
    );

    let err = repo
        .update_car(car.id + 100, &UpdateCar::new().active(false))
        .expect_err("expected update of missing car to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_car_repository_delete_cascades() {
    let test_db = common::TestDb::new("test_car_repository_delete_cascades.db");
    let repo = DieselRepository::new(test_db.pool());

    let gps = repo.create_amenity(&NewAmenity::new("GPS")).unwrap();
    let car = repo
        .create_car(
            &NewCar::new("Nexon")
                .with_details(CarDetailsInput {
                    no_of_seats: 5,
                    amenity_ids: Some(vec![gps.id]),
                })
                .with_prices(vec![day_price(12_000)]),
        )
        .unwrap();
    let customer = repo
        .create_customer(&NewCustomer::new("Meera", "Iyer", "9000000001"))
        .unwrap();
    repo.create_booking(&NewBooking::new(car.id, customer.id, at(1, 9), at(2, 9)))
        .unwrap();

    repo.delete_car(car.id).unwrap();

    assert!(repo.get_car_by_id(car.id).unwrap().is_none());
    assert!(
        repo.list_bookings(BookingListQuery::new().car_id(car.id))
            .unwrap()
            .is_empty()
    );
    // Amenities are master data and survive the car.
    assert_eq!(repo.list_amenities().unwrap().len(), 1);

    let err = repo
        .delete_car(car.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_deleting_category_detaches_cars() {
    let test_db = common::TestDb::new("test_deleting_category_detaches_cars.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&NewCarCategory::new("MUV")).unwrap();
    let car = repo
        .create_car(&NewCar::new("Ertiga").with_category(category.id))
        .unwrap();

    repo.delete_category(category.id).unwrap();

    let car = repo.get_car_by_id(car.id).unwrap().unwrap();
    assert_eq!(car.car_category, None);
    assert!(car.category.is_none());
}

#[test]
fn test_list_cars_filters_active_and_available() {
    let test_db = common::TestDb::new("test_list_cars_filters_active_and_available.db");
    let repo = DieselRepository::new(test_db.pool());

    let free = repo.create_car(&NewCar::new("Free")).unwrap();
    let booked = repo.create_car(&NewCar::new("Booked")).unwrap();
    let cancelled = repo.create_car(&NewCar::new("Cancelled")).unwrap();
    let inactive = repo
        .create_car(&NewCar::new("Inactive").active(false))
        .unwrap();

    let customer = repo
        .create_customer(&NewCustomer::new("Kiran", "Das", "9000000002"))
        .unwrap();

    repo.create_booking(
        &NewBooking::new(booked.id, customer.id, at(2, 10), at(4, 10))
            .with_status(BookingStatus::Confirmed),
    )
    .unwrap();
    repo.create_booking(
        &NewBooking::new(cancelled.id, customer.id, at(2, 10), at(4, 10))
            .with_status(BookingStatus::Cancelled),
    )
    .unwrap();

    let all_active: Vec<i32> = repo
        .list_cars(CarListQuery::new().active_only())
        .unwrap()
        .into_iter()
        .map(|car| car.id)
        .collect();
    assert_eq!(all_active, vec![free.id, booked.id, cancelled.id]);

    let everything = repo.list_cars(CarListQuery::new()).unwrap();
    assert!(everything.iter().any(|car| car.id == inactive.id));

    let available: Vec<i32> = repo
        .list_cars(
            CarListQuery::new()
                .active_only()
                .available_between(at(3, 0), at(5, 0)),
        )
        .unwrap()
        .into_iter()
        .map(|car| car.id)
        .collect();
    assert_eq!(available, vec![free.id, cancelled.id]);

    // Touching windows overlap: the booking ends exactly when the window starts.
    let touching: Vec<i32> = repo
        .list_cars(
            CarListQuery::new()
                .active_only()
                .available_between(at(4, 10), at(6, 0)),
        )
        .unwrap()
        .into_iter()
        .map(|car| car.id)
        .collect();
    assert!(!touching.contains(&booked.id));

    let later: Vec<i32> = repo
        .list_cars(
            CarListQuery::new()
                .active_only()
                .available_between(at(5, 0), at(6, 0)),
        )
        .unwrap()
        .into_iter()
        .map(|car| car.id)
        .collect();
    assert!(later.contains(&booked.id));

    let single = repo
        .list_cars(CarListQuery::new().car_id(booked.id))
        .unwrap();
    assert_eq!(single.len(), 1);
}

#[test]
fn test_customer_repository_enforces_unique_documents() {
    let test_db = common::TestDb::new("test_customer_repository_enforces_unique_documents.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_customer(
            &NewCustomer::new("Anil", "Shah", "9000000003")
                .with_pan_no("abcde1234f")
                .with_adharno("123412341234")
                .with_gender(Gender::Male)
                .prime(true),
        )
        .unwrap();
    assert_eq!(first.pan_no.as_deref(), Some("ABCDE1234F"));
    assert_eq!(first.gender, Some(Gender::Male));
    assert!(first.is_prime_user);
    assert!(!first.is_red_flag);

    let err = repo
        .create_customer(&NewCustomer::new("Other", "Person", "9000000004").with_pan_no("ABCDE1234F"))
        .expect_err("expected duplicate PAN to fail");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    repo.create_customer(&NewCustomer::new("Bela", "Shah", "9000000005"))
        .unwrap();

    let names: Vec<String> = repo
        .list_customers()
        .unwrap()
        .into_iter()
        .map(|customer| customer.first_name)
        .collect();
    assert_eq!(names, vec!["Anil", "Bela"]);

    assert!(repo.get_customer_by_id(first.id).unwrap().is_some());
    assert!(repo.get_customer_by_id(first.id + 50).unwrap().is_none());
}

#[test]
fn test_booking_repository_filters_and_defaults() {
    let test_db = common::TestDb::new("test_booking_repository_filters_and_defaults.db");
    let repo = DieselRepository::new(test_db.pool());

    let car_a = repo.create_car(&NewCar::new("A")).unwrap();
    let car_b = repo.create_car(&NewCar::new("B")).unwrap();
    let customer = repo
        .create_customer(&NewCustomer::new("Tara", "Sen", "9000000006"))
        .unwrap();

    let later = repo
        .create_booking(&NewBooking::new(car_a.id, customer.id, at(10, 9), at(12, 9)))
        .unwrap();
    let earlier = repo
        .create_booking(
            &NewBooking::new(car_a.id, customer.id, at(1, 9), at(2, 9))
                .with_payment(250_000, 100_000)
                .with_pickup_location(3),
        )
        .unwrap();
    repo.create_booking(&NewBooking::new(car_b.id, customer.id, at(5, 9), at(6, 9)))
        .unwrap();

    assert_eq!(later.status, BookingStatus::Pending);
    assert_eq!(later.payment_amount_cents, 0);
    assert_eq!(earlier.paid_amount_cents, 100_000);
    assert_eq!(earlier.pickup_location, Some(3));

    let for_car_a: Vec<i32> = repo
        .list_bookings(BookingListQuery::new().car_id(car_a.id))
        .unwrap()
        .into_iter()
        .map(|booking| booking.id)
        .collect();
    assert_eq!(for_car_a, vec![earlier.id, later.id]);

    let for_customer = repo
        .list_bookings(BookingListQuery::new().customer_id(customer.id))
        .unwrap();
    assert_eq!(for_customer.len(), 3);

    let err = repo
        .create_booking(&NewBooking::new(car_a.id + 100, customer.id, at(1, 0), at(2, 0)))
        .expect_err("expected foreign key violation");
    assert!(matches!(err, RepositoryError::MissingReference(_)));

    assert_eq!(
        repo.get_booking_by_id(later.id).unwrap().map(|b| b.car_id),
        Some(car_a.id)
    );
}
