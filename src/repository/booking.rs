use diesel::prelude::*;

use crate::{
    domain::booking::{
        Booking as DomainBooking, BookingListQuery, NewBooking as DomainNewBooking,
    },
    models::booking::{Booking as DbBooking, NewBooking as DbNewBooking},
    repository::errors::RepositoryResult,
    repository::{BookingReader, BookingWriter, DieselRepository},
};

impl BookingReader for DieselRepository {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBooking>> {
        use crate::schema::car_bookings;

        let mut conn = self.conn()?;
        let booking = car_bookings::table
            .filter(car_bookings::id.eq(id))
            .first::<DbBooking>(&mut conn)
            .optional()?;

        Ok(booking.map(Into::into))
    }

    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<DomainBooking>> {
        use crate::schema::car_bookings;

        let mut conn = self.conn()?;

        let mut items = car_bookings::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(car_id) = query.car_id {
            items = items.filter(car_bookings::car_id.eq(car_id));
        }

        if let Some(customer_id) = query.customer_id {
            items = items.filter(car_bookings::customer_id.eq(customer_id));
        }

        let db_bookings = items
            .order((
                car_bookings::journey_from_date.asc(),
                car_bookings::id.asc(),
            ))
            .load::<DbBooking>(&mut conn)?;

        Ok(db_bookings.into_iter().map(Into::into).collect())
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, new_booking: &DomainNewBooking) -> RepositoryResult<DomainBooking> {
        use crate::schema::car_bookings;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(car_bookings::table)
            .values(&DbNewBooking::from(new_booking))
            .get_result::<DbBooking>(&mut conn)?;

        Ok(created.into())
    }
}
