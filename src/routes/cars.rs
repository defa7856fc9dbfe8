use actix_web::{Responder, delete, get, post, route, web};

use crate::forms::cars::{AddCarForm, CarListParams, UpdateCarForm};
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok, ok_message};
use crate::services::cars as car_service;

#[get("/cars/list")]
pub async fn list_cars(
    params: web::Query<CarListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match car_service::list_cars(repo.get_ref(), params.into_inner()) {
        Ok(cars) => ok(cars),
        Err(err) => error_response(err, "list cars"),
    }
}

#[get("/admin/car/{car_id:\\d+}")]
pub async fn show_car(car_id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match car_service::get_car(repo.get_ref(), car_id.into_inner()) {
        Ok(car) => ok(car),
        Err(err) => error_response(err, "load car"),
    }
}

#[post("/admin/car/add")]
pub async fn add_car(
    form: web::Json<AddCarForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match car_service::create_car(repo.get_ref(), form.into_inner()) {
        Ok(car) => created(car, "Car created successfully"),
        Err(err) => error_response(err, "create car"),
    }
}

#[route("/admin/car/update/{car_id:\\d+}", method = "PUT", method = "POST")]
pub async fn update_car(
    car_id: web::Path<i32>,
    form: web::Json<UpdateCarForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match car_service::update_car(repo.get_ref(), car_id.into_inner(), form.into_inner()) {
        Ok(car) => ok(car),
        Err(err) => error_response(err, "update car"),
    }
}

#[delete("/admin/car/{car_id:\\d+}")]
pub async fn delete_car(
    car_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match car_service::delete_car(repo.get_ref(), car_id.into_inner()) {
        Ok(()) => ok_message("Car deleted successfully"),
        Err(err) => error_response(err, "delete car"),
    }
}
