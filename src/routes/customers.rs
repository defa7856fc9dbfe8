use actix_web::{Responder, get, post, web};

use crate::forms::customers::AddCustomerForm;
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok};
use crate::services::customers as customer_service;

#[post("/customer/add")]
pub async fn add_customer(
    form: web::Json<AddCustomerForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::create_customer(repo.get_ref(), form.into_inner()) {
        Ok(customer) => created(customer, "Customer created successfully"),
        Err(err) => error_response(err, "create customer"),
    }
}

#[get("/customers")]
pub async fn list_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    match customer_service::list_customers(repo.get_ref()) {
        Ok(customers) => ok(customers),
        Err(err) => error_response(err, "list customers"),
    }
}

#[get("/customer/{customer_id:\\d+}")]
pub async fn show_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::get_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(customer) => ok(customer),
        Err(err) => error_response(err, "load customer"),
    }
}
