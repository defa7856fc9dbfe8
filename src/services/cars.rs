use std::collections::{BTreeSet, HashSet};

use crate::domain::car::{Car, PricedCar};
use crate::domain::pricing::PriceTier;
use crate::forms::cars::{AddCarForm, CarListParams, UpdateCarForm};
use crate::repository::{AmenityReader, CarReader, CarWriter, CategoryReader, PriceTypeReader};
use crate::services::{ServiceError, ServiceResult};

/// Lists active cars with their resolved display prices.
///
/// When both journey dates are supplied, cars with an overlapping
/// non-cancelled booking are left out.
pub fn list_cars<R>(repo: &R, params: CarListParams) -> ServiceResult<Vec<PricedCar>>
where
    R: CarReader + ?Sized,
{
    let query = params
        .into_query()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(car_id) = query.car_id {
        if repo.get_car_by_id(car_id)?.is_none() {
            return Err(ServiceError::Form(format!("car {car_id} does not exist")));
        }
    }

    let cars = repo.list_cars(query).map_err(ServiceError::from)?;

    Ok(cars.into_iter().map(price_car).collect())
}

/// Loads a single car regardless of its activity flag.
pub fn get_car<R>(repo: &R, car_id: i32) -> ServiceResult<PricedCar>
where
    R: CarReader + ?Sized,
{
    repo.get_car_by_id(car_id)?
        .map(price_car)
        .ok_or(ServiceError::NotFound)
}

/// Creates a car together with its details, amenities and prices.
pub fn create_car<R>(repo: &R, form: AddCarForm) -> ServiceResult<PricedCar>
where
    R: CarWriter + CategoryReader + AmenityReader + PriceTypeReader + ?Sized,
{
    let new_car = form
        .into_new_car()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_references_exist(repo, new_car.car_category, new_car.amenity_ids())?;
    ensure_price_types_registered(repo, &new_car.price_tiers())?;

    let car = repo.create_car(&new_car).map_err(ServiceError::from)?;
    log::info!("Created car {} ({})", car.id, car.car_name);

    Ok(price_car(car))
}

/// Applies a partial update to a car.
pub fn update_car<R>(repo: &R, car_id: i32, form: UpdateCarForm) -> ServiceResult<PricedCar>
where
    R: CarWriter + CategoryReader + AmenityReader + PriceTypeReader + ?Sized,
{
    let updates = form
        .into_update_car()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_references_exist(repo, updates.car_category, updates.amenity_ids())?;
    ensure_price_types_registered(repo, &updates.price_tiers())?;

    let car = repo
        .update_car(car_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(price_car(car))
}

/// Deletes a car and everything attached to it.
pub fn delete_car<R>(repo: &R, car_id: i32) -> ServiceResult<()>
where
    R: CarWriter + ?Sized,
{
    repo.delete_car(car_id).map_err(ServiceError::from)?;
    log::info!("Deleted car {car_id}");
    Ok(())
}

fn ensure_references_exist<R>(
    repo: &R,
    category_id: Option<i32>,
    amenity_ids: &[i32],
) -> ServiceResult<()>
where
    R: CategoryReader + AmenityReader + ?Sized,
{
    if let Some(category_id) = category_id {
        if repo.get_category_by_id(category_id)?.is_none() {
            return Err(ServiceError::Form(format!(
                "car category {category_id} does not exist"
            )));
        }
    }

    if amenity_ids.is_empty() {
        return Ok(());
    }

    let requested: BTreeSet<i32> = amenity_ids.iter().copied().collect();
    let requested: Vec<i32> = requested.into_iter().collect();
    let found: BTreeSet<i32> = repo
        .get_amenities_by_ids(&requested)?
        .into_iter()
        .map(|amenity| amenity.id)
        .collect();

    let missing: Vec<String> = requested
        .iter()
        .filter(|id| !found.contains(id))
        .map(i32::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(ServiceError::Form(format!(
            "amenities do not exist: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

/// Prices can only be entered for tiers present in the price type catalog.
fn ensure_price_types_registered<R>(repo: &R, tiers: &[PriceTier]) -> ServiceResult<()>
where
    R: PriceTypeReader + ?Sized,
{
    if tiers.is_empty() {
        return Ok(());
    }

    let registered: HashSet<PriceTier> = repo
        .list_price_types()?
        .iter()
        .filter_map(|price_type| price_type.type_name.parse().ok())
        .collect();

    let missing: BTreeSet<&str> = tiers
        .iter()
        .filter(|tier| !registered.contains(*tier))
        .map(|tier| tier.as_str())
        .collect();
    if !missing.is_empty() {
        let missing: Vec<&str> = missing.into_iter().collect();
        return Err(ServiceError::Form(format!(
            "price types are not registered: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

fn price_car(car: Car) -> PricedCar {
    let stored_tiers = car
        .price_details
        .iter()
        .map(|price| price.price_type.as_str())
        .chain(
            car.discount_price_details
                .iter()
                .map(|price| price.price_type.as_str()),
        );
    for tier in stored_tiers {
        if tier.parse::<PriceTier>().is_err() {
            log::warn!("Car {} has a price with unknown tier `{tier}`", car.id);
        }
    }

    PricedCar::from(car)
}
