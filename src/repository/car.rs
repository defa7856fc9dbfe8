use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;
use diesel::dsl::not;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::booking::BookingStatus,
    domain::car::{
        Car as DomainCar, CarAdditionalDetail as DomainCarAdditionalDetail,
        CarDetailsInput, CarDiscountPriceDetail as DomainCarDiscountPriceDetail,
        CarListQuery, CarPriceDetail as DomainCarPriceDetail, NewCar as DomainNewCar,
        NewCarDiscountPrice, NewCarPrice, UpdateCar as DomainUpdateCar,
    },
    domain::amenity::Amenity as DomainAmenity,
    domain::category::CarCategory as DomainCarCategory,
    models::amenity::Amenity as DbAmenity,
    models::car::{
        Car as DbCar, CarAdditionalDetail as DbCarAdditionalDetail,
        CarDiscountPriceDetail as DbCarDiscountPriceDetail, CarPriceDetail as DbCarPriceDetail,
        NewCar as DbNewCar, NewCarAdditionalDetail, NewCarAmenity, NewCarDiscountPriceDetail,
        NewCarPriceDetail, UpdateCar as DbUpdateCar,
    },
    models::category::CarCategory as DbCarCategory,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{CarReader, CarWriter, DieselRepository},
};

impl CarReader for DieselRepository {
    fn get_car_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCar>> {
        let mut conn = self.conn()?;
        find_car(&mut conn, id)
    }

    fn list_cars(&self, query: CarListQuery) -> RepositoryResult<Vec<DomainCar>> {
        use crate::schema::{car_bookings, cars};

        let mut conn = self.conn()?;

        let mut items = cars::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(car_id) = query.car_id {
            items = items.filter(cars::id.eq(car_id));
        }

        if query.active_only {
            items = items.filter(cars::is_active.eq(true));
        }

        if let Some((start, end)) = query.available_between {
            let booked_car_ids = car_bookings::table
                .filter(car_bookings::status.ne(BookingStatus::Cancelled.as_str()))
                .filter(car_bookings::journey_from_date.le(end))
                .filter(car_bookings::journey_end_date.ge(start))
                .select(car_bookings::car_id);
            items = items.filter(not(cars::id.eq_any(booked_car_ids)));
        }

        let db_cars = items.order(cars::id.asc()).load::<DbCar>(&mut conn)?;

        load_relations(&mut conn, db_cars)
    }
}

impl CarWriter for DieselRepository {
    fn create_car(&self, new_car: &DomainNewCar) -> RepositoryResult<DomainCar> {
        use crate::schema::cars;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(cars::table)
                .values(&DbNewCar::from(new_car))
                .get_result::<DbCar>(conn)?;

            if let Some(details) = &new_car.additional_details {
                upsert_details(conn, created.id, details, created.updated_at)?;
            }
            replace_prices(conn, created.id, &new_car.price_details)?;
            replace_discount_prices(conn, created.id, &new_car.discount_price_details)?;

            find_car(conn, created.id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_car(&self, car_id: i32, updates: &DomainUpdateCar) -> RepositoryResult<DomainCar> {
        use crate::schema::cars;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction::<_, RepositoryError, _>(|conn| {
            // Always touches `updated_at`, so relation-only patches bump it too.
            let updated = diesel::update(cars::table.filter(cars::id.eq(car_id)))
                .set(&DbUpdateCar::from(updates))
                .execute(conn)?;
            if updated == 0 {
                return Err(RepositoryError::NotFound);
            }

            if let Some(details) = &updates.additional_details {
                upsert_details(conn, car_id, details, updates.updated_at)?;
            }
            if let Some(prices) = &updates.price_details {
                replace_prices(conn, car_id, prices)?;
            }
            if let Some(prices) = &updates.discount_price_details {
                replace_discount_prices(conn, car_id, prices)?;
            }

            find_car(conn, car_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_car(&self, car_id: i32) -> RepositoryResult<()> {
        use crate::schema::cars;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(cars::table.filter(cars::id.eq(car_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn find_car(conn: &mut SqliteConnection, car_id: i32) -> RepositoryResult<Option<DomainCar>> {
    use crate::schema::cars;

    let car = cars::table
        .filter(cars::id.eq(car_id))
        .first::<DbCar>(conn)
        .optional()?;

    match car {
        Some(car) => Ok(load_relations(conn, vec![car])?.pop()),
        None => Ok(None),
    }
}

fn upsert_details(
    conn: &mut SqliteConnection,
    car_id: i32,
    details: &CarDetailsInput,
    updated_at: NaiveDateTime,
) -> RepositoryResult<()> {
    use crate::schema::{car_additional_details, car_amenities};

    let updated = diesel::update(
        car_additional_details::table.filter(car_additional_details::car_id.eq(car_id)),
    )
    .set((
        car_additional_details::no_of_seats.eq(details.no_of_seats),
        car_additional_details::updated_at.eq(updated_at),
    ))
    .execute(conn)?;

    if updated == 0 {
        diesel::insert_into(car_additional_details::table)
            .values(&NewCarAdditionalDetail {
                car_id,
                no_of_seats: details.no_of_seats,
            })
            .execute(conn)?;
    }

    if let Some(amenity_ids) = &details.amenity_ids {
        diesel::delete(car_amenities::table.filter(car_amenities::car_id.eq(car_id)))
            .execute(conn)?;

        let rows: Vec<NewCarAmenity> = amenity_ids
            .iter()
            .copied()
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .map(|amenity_id| NewCarAmenity { car_id, amenity_id })
            .collect();

        if !rows.is_empty() {
            diesel::insert_into(car_amenities::table)
                .values(&rows)
                .execute(conn)?;
        }
    }

    Ok(())
}

fn replace_prices(
    conn: &mut SqliteConnection,
    car_id: i32,
    prices: &[NewCarPrice],
) -> RepositoryResult<()> {
    use crate::schema::car_price_details;

    diesel::delete(car_price_details::table.filter(car_price_details::car_id.eq(car_id)))
        .execute(conn)?;

    let rows: Vec<NewCarPriceDetail> = prices
        .iter()
        .map(|price| NewCarPriceDetail::from_domain(car_id, price))
        .collect();

    if !rows.is_empty() {
        diesel::insert_into(car_price_details::table)
            .values(&rows)
            .execute(conn)?;
    }

    Ok(())
}

fn replace_discount_prices(
    conn: &mut SqliteConnection,
    car_id: i32,
    prices: &[NewCarDiscountPrice],
) -> RepositoryResult<()> {
    use crate::schema::car_discount_price_details;

    diesel::delete(
        car_discount_price_details::table.filter(car_discount_price_details::car_id.eq(car_id)),
    )
    .execute(conn)?;

    let rows: Vec<NewCarDiscountPriceDetail> = prices
        .iter()
        .map(|price| NewCarDiscountPriceDetail::from_domain(car_id, price))
        .collect();

    if !rows.is_empty() {
        diesel::insert_into(car_discount_price_details::table)
            .values(&rows)
            .execute(conn)?;
    }

    Ok(())
}

/// Load categories, details, amenities and prices for `db_cars` in bulk.
fn load_relations(
    conn: &mut SqliteConnection,
    db_cars: Vec<DbCar>,
) -> RepositoryResult<Vec<DomainCar>> {
    use crate::schema::{
        amenities, car_additional_details, car_amenities, car_categories,
        car_discount_price_details, car_price_details,
    };

    if db_cars.is_empty() {
        return Ok(Vec::new());
    }

    let car_ids: Vec<i32> = db_cars.iter().map(|car| car.id).collect();
    let category_ids: Vec<i32> = db_cars.iter().filter_map(|car| car.car_category).collect();

    let mut category_map: HashMap<i32, DomainCarCategory> = HashMap::new();
    if !category_ids.is_empty() {
        let rows = car_categories::table
            .filter(car_categories::id.eq_any(&category_ids))
            .load::<DbCarCategory>(conn)?;
        for row in rows {
            category_map.insert(row.id, row.into());
        }
    }

    let mut amenity_map: HashMap<i32, Vec<DomainAmenity>> = HashMap::new();
    let amenity_rows = car_amenities::table
        .inner_join(amenities::table)
        .filter(car_amenities::car_id.eq_any(&car_ids))
        .select((car_amenities::car_id, DbAmenity::as_select()))
        .load::<(i32, DbAmenity)>(conn)?;
    for (car_id, amenity) in amenity_rows {
        amenity_map.entry(car_id).or_default().push(amenity.into());
    }

    let mut details_map: HashMap<i32, DomainCarAdditionalDetail> = HashMap::new();
    let detail_rows = car_additional_details::table
        .filter(car_additional_details::car_id.eq_any(&car_ids))
        .load::<DbCarAdditionalDetail>(conn)?;
    for row in detail_rows {
        let car_id = row.car_id;
        let detail = DomainCarAdditionalDetail::from(row)
            .with_amenities(amenity_map.remove(&car_id).unwrap_or_default());
        details_map.insert(car_id, detail);
    }

    let mut price_map: HashMap<i32, Vec<DomainCarPriceDetail>> = HashMap::new();
    let price_rows = car_price_details::table
        .filter(car_price_details::car_id.eq_any(&car_ids))
        .order(car_price_details::id.asc())
        .load::<DbCarPriceDetail>(conn)?;
    for row in price_rows {
        price_map.entry(row.car_id).or_default().push(row.into());
    }

    let mut discount_map: HashMap<i32, Vec<DomainCarDiscountPriceDetail>> = HashMap::new();
    let discount_rows = car_discount_price_details::table
        .filter(car_discount_price_details::car_id.eq_any(&car_ids))
        .order(car_discount_price_details::id.asc())
        .load::<DbCarDiscountPriceDetail>(conn)?;
    for row in discount_rows {
        discount_map.entry(row.car_id).or_default().push(row.into());
    }

    let mut domain_cars = Vec::with_capacity(db_cars.len());
    for db_car in db_cars {
        let id = db_car.id;
        let category = db_car
            .car_category
            .and_then(|category_id| category_map.get(&category_id).cloned());
        domain_cars.push(db_car.into_domain(
            category,
            details_map.remove(&id),
            price_map.remove(&id).unwrap_or_default(),
            discount_map.remove(&id).unwrap_or_default(),
        ));
    }

    Ok(domain_cars)
}
