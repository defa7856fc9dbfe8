use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Gender recorded for a customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(value.to_string()),
        }
    }
}

/// Domain representation of a rental customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Optional postal address.
    pub address: Option<String>,
    /// Twelve digit national identity number, unique across customers.
    pub adharno: Option<String>,
    /// Ten character tax identifier, unique across customers.
    pub pan_no: Option<String>,
    pub phone_no: String,
    pub gender: Option<Gender>,
    /// Prime customers get preferential treatment at the counter.
    pub is_prime_user: bool,
    /// Flagged customers need manual review before renting.
    pub is_red_flag: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub adharno: Option<String>,
    pub pan_no: Option<String>,
    pub phone_no: String,
    pub gender: Option<Gender>,
    pub is_prime_user: bool,
    pub is_red_flag: bool,
}

impl NewCustomer {
    /// Build a customer payload with the mandatory fields and no flags set.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_no: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: None,
            adharno: None,
            pan_no: None,
            phone_no: phone_no.into(),
            gender: None,
            is_prime_user: false,
            is_red_flag: false,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_adharno(mut self, adharno: impl Into<String>) -> Self {
        self.adharno = Some(adharno.into());
        self
    }

    /// Attach a PAN, normalised to uppercase.
    #[must_use]
    pub fn with_pan_no(mut self, pan_no: impl Into<String>) -> Self {
        self.pan_no = Some(pan_no.into().to_ascii_uppercase());
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn prime(mut self, is_prime_user: bool) -> Self {
        self.is_prime_user = is_prime_user;
        self
    }

    #[must_use]
    pub fn red_flag(mut self, is_red_flag: bool) -> Self {
        self.is_red_flag = is_red_flag;
        self
    }
}
