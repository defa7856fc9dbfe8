use actix_web::{Responder, get, post, web};

use crate::forms::bookings::{AddBookingForm, BookingListParams};
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok};
use crate::services::bookings as booking_service;

#[post("/booking/add")]
pub async fn add_booking(
    form: web::Json<AddBookingForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match booking_service::create_booking(repo.get_ref(), form.into_inner()) {
        Ok(booking) => created(booking, "Booking created successfully"),
        Err(err) => error_response(err, "create booking"),
    }
}

#[get("/bookings")]
pub async fn list_bookings(
    params: web::Query<BookingListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match booking_service::list_bookings(repo.get_ref(), params.into_inner()) {
        Ok(bookings) => ok(bookings),
        Err(err) => error_response(err, "list bookings"),
    }
}

#[get("/booking/{booking_id:\\d+}")]
pub async fn show_booking(
    booking_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match booking_service::get_booking(repo.get_ref(), booking_id.into_inner()) {
        Ok(booking) => ok(booking),
        Err(err) => error_response(err, "load booking"),
    }
}
