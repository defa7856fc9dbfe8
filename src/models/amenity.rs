use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::amenity::{Amenity as DomainAmenity, NewAmenity as DomainNewAmenity};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::amenities)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::amenities)]
pub struct NewAmenity<'a> {
    pub name: &'a str,
}

impl From<Amenity> for DomainAmenity {
    fn from(value: Amenity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAmenity> for NewAmenity<'a> {
    fn from(value: &'a DomainNewAmenity) -> Self {
        Self {
            name: value.name.as_str(),
        }
    }
}
