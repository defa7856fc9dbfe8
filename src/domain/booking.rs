use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::car::Car;
use crate::domain::customer::Customer;

/// Lifecycle states of a car booking.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Booking has been requested and awaits confirmation.
    #[default]
    Pending,
    /// Booking has been confirmed with the customer.
    Confirmed,
    /// The rental has finished.
    Completed,
    /// Booking was cancelled; it no longer blocks the car.
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(value.to_string()),
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<BookingStatus> for &'static str {
    fn from(value: BookingStatus) -> Self {
        value.as_str()
    }
}

/// Domain representation of a car booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Unique identifier of the booking.
    pub id: i32,
    /// Booked car.
    pub car_id: i32,
    /// Customer the car is booked for.
    pub customer_id: i32,
    /// Optional pickup location identifier.
    pub pickup_location: Option<i32>,
    /// Optional drop location identifier.
    pub drop_location: Option<i32>,
    /// Start of the rental period.
    pub journey_from_date: NaiveDateTime,
    /// End of the rental period.
    pub journey_end_date: NaiveDateTime,
    /// Current lifecycle status of the booking.
    pub status: BookingStatus,
    /// Amount due, in the smallest currency unit.
    pub payment_amount_cents: i64,
    /// Amount already paid, in the smallest currency unit.
    pub paid_amount_cents: i64,
    /// Timestamp for when the booking record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the booking record.
    pub updated_at: NaiveDateTime,
}

/// Booking returned by the API together with the booked car and customer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    pub car: Option<Car>,
    pub customer: Option<Customer>,
}

/// Payload required to insert a new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub car_id: i32,
    pub customer_id: i32,
    pub pickup_location: Option<i32>,
    pub drop_location: Option<i32>,
    pub journey_from_date: NaiveDateTime,
    pub journey_end_date: NaiveDateTime,
    pub status: BookingStatus,
    pub payment_amount_cents: i64,
    pub paid_amount_cents: i64,
}

impl NewBooking {
    /// Build a pending, unpaid booking for the given period.
    pub fn new(
        car_id: i32,
        customer_id: i32,
        journey_from_date: NaiveDateTime,
        journey_end_date: NaiveDateTime,
    ) -> Self {
        Self {
            car_id,
            customer_id,
            pickup_location: None,
            drop_location: None,
            journey_from_date,
            journey_end_date,
            status: BookingStatus::Pending,
            payment_amount_cents: 0,
            paid_amount_cents: 0,
        }
    }

    pub fn with_pickup_location(mut self, location_id: i32) -> Self {
        self.pickup_location = Some(location_id);
        self
    }

    pub fn with_drop_location(mut self, location_id: i32) -> Self {
        self.drop_location = Some(location_id);
        self
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_payment(mut self, payment_amount_cents: i64, paid_amount_cents: i64) -> Self {
        self.payment_amount_cents = payment_amount_cents;
        self.paid_amount_cents = paid_amount_cents;
        self
    }
}

/// Query definition used to list bookings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingListQuery {
    /// Optional car identifier filter.
    pub car_id: Option<i32>,
    /// Optional customer identifier filter.
    pub customer_id: Option<i32>,
}

impl BookingListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by car identifier.
    pub fn car_id(mut self, car_id: i32) -> Self {
        self.car_id = Some(car_id);
        self
    }

    /// Filter the results by customer identifier.
    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}
