use crate::domain::booking::{Booking, BookingDetails, BookingListQuery};
use crate::forms::bookings::{AddBookingForm, BookingListParams};
use crate::repository::{BookingReader, BookingWriter, CarReader, CustomerReader};
use crate::services::{ServiceError, ServiceResult};

/// Lists bookings, optionally narrowed to one car and/or customer.
pub fn list_bookings<R>(repo: &R, params: BookingListParams) -> ServiceResult<Vec<Booking>>
where
    R: BookingReader + ?Sized,
{
    repo.list_bookings(BookingListQuery::from(params))
        .map_err(ServiceError::from)
}

/// Loads a booking together with the booked car and customer.
pub fn get_booking<R>(repo: &R, booking_id: i32) -> ServiceResult<BookingDetails>
where
    R: BookingReader + CarReader + CustomerReader + ?Sized,
{
    let booking = repo
        .get_booking_by_id(booking_id)?
        .ok_or(ServiceError::NotFound)?;

    with_relations(repo, booking)
}

/// Creates a booking after checking that its car and customer exist.
pub fn create_booking<R>(repo: &R, form: AddBookingForm) -> ServiceResult<BookingDetails>
where
    R: BookingWriter + CarReader + CustomerReader + ?Sized,
{
    let new_booking = form
        .into_new_booking()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let car = repo.get_car_by_id(new_booking.car_id)?.ok_or_else(|| {
        ServiceError::Form(format!("car {} does not exist", new_booking.car_id))
    })?;
    let customer = repo
        .get_customer_by_id(new_booking.customer_id)?
        .ok_or_else(|| {
            ServiceError::Form(format!(
                "customer {} does not exist",
                new_booking.customer_id
            ))
        })?;

    let booking = repo
        .create_booking(&new_booking)
        .map_err(ServiceError::from)?;
    log::info!(
        "Created booking {} for car {} and customer {}",
        booking.id,
        booking.car_id,
        booking.customer_id
    );

    Ok(BookingDetails {
        booking,
        car: Some(car),
        customer: Some(customer),
    })
}

fn with_relations<R>(repo: &R, booking: Booking) -> ServiceResult<BookingDetails>
where
    R: CarReader + CustomerReader + ?Sized,
{
    let car = repo.get_car_by_id(booking.car_id)?;
    let customer = repo.get_customer_by_id(booking.customer_id)?;

    Ok(BookingDetails {
        booking,
        car,
        customer,
    })
}
