use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::booking::{BookingListQuery, BookingStatus, NewBooking};
use crate::forms::{InvalidAmount, amount_to_cents, parse_datetime, sanitize_optional_text};

const STATUS_MAX_LEN: u64 = 50;

/// Result type returned by the booking form helpers.
pub type BookingFormResult<T> = Result<T, BookingFormError>;

/// Errors that can occur while processing booking forms.
#[derive(Debug, Error)]
pub enum BookingFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("invalid {field} `{value}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("journey_end_date must be after journey_from_date")]
    EndBeforeStart,
    #[error("invalid booking status `{0}`")]
    InvalidStatus(String),
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),
}

/// Payload accepted when creating a booking.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBookingForm {
    #[validate(range(min = 1))]
    pub car_id: i32,
    #[validate(range(min = 1))]
    pub customer_id: i32,
    #[serde(default)]
    pub pickup_location: Option<i32>,
    #[serde(default)]
    pub drop_location: Option<i32>,
    pub journey_from_date: String,
    pub journey_end_date: String,
    #[validate(length(max = STATUS_MAX_LEN))]
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_amount: Option<Decimal>,
    #[serde(default)]
    pub paid_amount: Option<Decimal>,
}

impl AddBookingForm {
    /// Validates the payload into a domain `NewBooking`.
    ///
    /// Existence of the referenced car and customer is checked by the service.
    pub fn into_new_booking(self) -> BookingFormResult<NewBooking> {
        self.validate()?;

        let from = parse_datetime(&self.journey_from_date).ok_or_else(|| {
            BookingFormError::InvalidDate {
                field: "journey_from_date",
                value: self.journey_from_date.clone(),
            }
        })?;
        let end = parse_datetime(&self.journey_end_date).ok_or_else(|| {
            BookingFormError::InvalidDate {
                field: "journey_end_date",
                value: self.journey_end_date.clone(),
            }
        })?;
        if end <= from {
            return Err(BookingFormError::EndBeforeStart);
        }

        let status = match sanitize_optional_text(self.status.as_deref()) {
            Some(status) => status
                .parse::<BookingStatus>()
                .map_err(BookingFormError::InvalidStatus)?,
            None => BookingStatus::default(),
        };

        let payment = self.payment_amount.map(amount_to_cents).transpose()?.unwrap_or(0);
        let paid = self.paid_amount.map(amount_to_cents).transpose()?.unwrap_or(0);

        let mut booking = NewBooking::new(self.car_id, self.customer_id, from, end)
            .with_status(status)
            .with_payment(payment, paid);

        if let Some(location) = self.pickup_location {
            booking = booking.with_pickup_location(location);
        }
        if let Some(location) = self.drop_location {
            booking = booking.with_drop_location(location);
        }

        Ok(booking)
    }
}

/// Query string accepted by the bookings listing.
#[derive(Debug, Default, Deserialize)]
pub struct BookingListParams {
    pub car_id: Option<i32>,
    pub customer_id: Option<i32>,
}

impl From<BookingListParams> for BookingListQuery {
    fn from(params: BookingListParams) -> Self {
        let mut query = BookingListQuery::new();
        if let Some(car_id) = params.car_id {
            query = query.car_id(car_id);
        }
        if let Some(customer_id) = params.customer_id {
            query = query.customer_id(customer_id);
        }
        query
    }
}
