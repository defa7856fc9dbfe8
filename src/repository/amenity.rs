use diesel::prelude::*;

use crate::{
    domain::amenity::{Amenity as DomainAmenity, NewAmenity as DomainNewAmenity},
    models::amenity::{Amenity as DbAmenity, NewAmenity as DbNewAmenity},
    repository::errors::RepositoryResult,
    repository::{AmenityReader, AmenityWriter, DieselRepository},
};

impl AmenityReader for DieselRepository {
    fn list_amenities(&self) -> RepositoryResult<Vec<DomainAmenity>> {
        use crate::schema::amenities;

        let mut conn = self.conn()?;
        let items = amenities::table
            .order((amenities::name.asc(), amenities::id.asc()))
            .load::<DbAmenity>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn get_amenities_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<DomainAmenity>> {
        use crate::schema::amenities;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let items = amenities::table
            .filter(amenities::id.eq_any(ids))
            .order(amenities::name.asc())
            .load::<DbAmenity>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl AmenityWriter for DieselRepository {
    fn create_amenity(&self, new_amenity: &DomainNewAmenity) -> RepositoryResult<DomainAmenity> {
        use crate::schema::amenities;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(amenities::table)
            .values(&DbNewAmenity::from(new_amenity))
            .get_result::<DbAmenity>(&mut conn)?;

        Ok(created.into())
    }
}
