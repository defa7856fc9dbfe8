use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub adharno: Option<String>,
    pub pan_no: Option<String>,
    pub phone_no: String,
    pub gender: Option<String>,
    pub is_prime_user: bool,
    pub is_red_flag: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: Option<&'a str>,
    pub adharno: Option<&'a str>,
    pub pan_no: Option<&'a str>,
    pub phone_no: &'a str,
    pub gender: Option<&'static str>,
    pub is_prime_user: bool,
    pub is_red_flag: bool,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            address: value.address,
            adharno: value.adharno,
            pan_no: value.pan_no,
            phone_no: value.phone_no,
            // Unrecognised stored values read back as "not recorded".
            gender: value.gender.and_then(|gender| gender.parse().ok()),
            is_prime_user: value.is_prime_user,
            is_red_flag: value.is_red_flag,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            first_name: value.first_name.as_str(),
            last_name: value.last_name.as_str(),
            address: value.address.as_deref(),
            adharno: value.adharno.as_deref(),
            pan_no: value.pan_no.as_deref(),
            phone_no: value.phone_no.as_str(),
            gender: value.gender.map(|gender| gender.as_str()),
            is_prime_user: value.is_prime_user,
            is_red_flag: value.is_red_flag,
        }
    }
}
