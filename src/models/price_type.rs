use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::price_type::{NewPriceType as DomainNewPriceType, PriceType as DomainPriceType};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::price_types)]
pub struct PriceType {
    pub id: i32,
    pub type_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::price_types)]
pub struct NewPriceType {
    pub type_name: &'static str,
}

impl From<PriceType> for DomainPriceType {
    fn from(value: PriceType) -> Self {
        Self {
            id: value.id,
            type_name: value.type_name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewPriceType> for NewPriceType {
    fn from(value: &DomainNewPriceType) -> Self {
        Self {
            type_name: value.tier.as_str(),
        }
    }
}
