use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::booking::{Booking as DomainBooking, NewBooking as DomainNewBooking};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::car_bookings)]
pub struct Booking {
    pub id: i32,
    pub car_id: i32,
    pub customer_id: i32,
    pub pickup_location: Option<i32>,
    pub drop_location: Option<i32>,
    pub journey_from_date: NaiveDateTime,
    pub journey_end_date: NaiveDateTime,
    pub status: String,
    pub payment_amount_cents: i64,
    pub paid_amount_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::car_bookings)]
pub struct NewBooking {
    pub car_id: i32,
    pub customer_id: i32,
    pub pickup_location: Option<i32>,
    pub drop_location: Option<i32>,
    pub journey_from_date: NaiveDateTime,
    pub journey_end_date: NaiveDateTime,
    pub status: &'static str,
    pub payment_amount_cents: i64,
    pub paid_amount_cents: i64,
}

impl From<Booking> for DomainBooking {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id,
            car_id: value.car_id,
            customer_id: value.customer_id,
            pickup_location: value.pickup_location,
            drop_location: value.drop_location,
            journey_from_date: value.journey_from_date,
            journey_end_date: value.journey_end_date,
            status: value.status.as_str().into(),
            payment_amount_cents: value.payment_amount_cents,
            paid_amount_cents: value.paid_amount_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewBooking> for NewBooking {
    fn from(value: &DomainNewBooking) -> Self {
        Self {
            car_id: value.car_id,
            customer_id: value.customer_id,
            pickup_location: value.pickup_location,
            drop_location: value.drop_location,
            journey_from_date: value.journey_from_date,
            journey_end_date: value.journey_end_date,
            status: value.status.into(),
            payment_amount_cents: value.payment_amount_cents,
            paid_amount_cents: value.paid_amount_cents,
        }
    }
}
