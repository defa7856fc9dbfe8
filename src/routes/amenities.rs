use actix_web::{Responder, get, post, web};

use crate::forms::amenities::AddAmenityForm;
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok};
use crate::services::amenities as amenity_service;

#[get("/amenities")]
pub async fn list_amenities(repo: web::Data<DieselRepository>) -> impl Responder {
    match amenity_service::list_amenities(repo.get_ref()) {
        Ok(amenities) => ok(amenities),
        Err(err) => error_response(err, "list amenities"),
    }
}

#[post("/amenities/add")]
pub async fn add_amenity(
    form: web::Json<AddAmenityForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match amenity_service::create_amenity(repo.get_ref(), form.into_inner()) {
        Ok(amenity) => created(amenity, "Amenity created successfully"),
        Err(err) => error_response(err, "create amenity"),
    }
}
