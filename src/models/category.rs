use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{CarCategory as DomainCarCategory, NewCarCategory as DomainNewCarCategory};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::car_categories)]
pub struct CarCategory {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::car_categories)]
pub struct NewCarCategory<'a> {
    pub name: &'a str,
}

impl From<CarCategory> for DomainCarCategory {
    fn from(value: CarCategory) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCarCategory> for NewCarCategory<'a> {
    fn from(value: &'a DomainNewCarCategory) -> Self {
        Self {
            name: value.name.as_str(),
        }
    }
}
