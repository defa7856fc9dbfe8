use actix_web::{Responder, get, post, web};

use crate::forms::price_types::AddPriceTypeForm;
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok};
use crate::services::price_types as price_type_service;

#[get("/price-type")]
pub async fn list_price_types(repo: web::Data<DieselRepository>) -> impl Responder {
    match price_type_service::list_price_types(repo.get_ref()) {
        Ok(price_types) => ok(price_types),
        Err(err) => error_response(err, "list price types"),
    }
}

#[post("/price-type/add")]
pub async fn add_price_type(
    form: web::Json<AddPriceTypeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match price_type_service::create_price_type(repo.get_ref(), form.into_inner()) {
        Ok(price_type) => created(price_type, "Price type created successfully"),
        Err(err) => error_response(err, "create price type"),
    }
}
