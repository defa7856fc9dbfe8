use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::{Gender, NewCustomer};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

/// Maximum length of first and last names.
const NAME_MAX_LEN: u64 = 100;
/// Aadhaar numbers are exactly twelve characters.
const ADHARNO_LEN: u64 = 12;
/// PAN numbers are exactly ten characters.
const PAN_NO_LEN: u64 = 10;
const PHONE_NO_MAX_LEN: u64 = 15;

/// Result type returned by the customer form helpers.
pub type CustomerFormResult<T> = Result<T, CustomerFormError>;

/// Errors that can occur while processing customer forms.
#[derive(Debug, Error)]
pub enum CustomerFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A mandatory field was blank after sanitization.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// Gender must be one of `male`, `female` or `other`.
    #[error("invalid gender `{0}`")]
    InvalidGender(String),
}

/// Payload accepted when registering a customer.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomerForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub last_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(equal = ADHARNO_LEN))]
    #[serde(default)]
    pub adharno: Option<String>,
    #[validate(length(equal = PAN_NO_LEN))]
    #[serde(default)]
    pub pan_no: Option<String>,
    #[validate(length(min = 1, max = PHONE_NO_MAX_LEN))]
    pub phone_no: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub is_prime_user: Option<bool>,
    #[serde(default)]
    pub is_red_flag: Option<bool>,
}

impl AddCustomerForm {
    /// Validates and sanitizes the payload into a domain `NewCustomer`.
    pub fn into_new_customer(self) -> CustomerFormResult<NewCustomer> {
        self.validate()?;

        let first_name = required_text(&self.first_name, "first_name")?;
        let last_name = required_text(&self.last_name, "last_name")?;
        let phone_no = required_text(&self.phone_no, "phone_no")?;

        let mut customer = NewCustomer::new(first_name, last_name, phone_no)
            .prime(self.is_prime_user.unwrap_or(false))
            .red_flag(self.is_red_flag.unwrap_or(false));

        if let Some(address) = sanitize_optional_text(self.address.as_deref()) {
            customer = customer.with_address(address);
        }
        if let Some(adharno) = sanitize_optional_text(self.adharno.as_deref()) {
            customer = customer.with_adharno(adharno);
        }
        if let Some(pan_no) = sanitize_optional_text(self.pan_no.as_deref()) {
            customer = customer.with_pan_no(pan_no);
        }
        if let Some(gender) = sanitize_optional_text(self.gender.as_deref()) {
            let gender: Gender = gender.parse().map_err(CustomerFormError::InvalidGender)?;
            customer = customer.with_gender(gender);
        }

        Ok(customer)
    }
}

fn required_text(value: &str, field: &'static str) -> CustomerFormResult<String> {
    let sanitized = sanitize_inline_text(value);
    if sanitized.is_empty() {
        return Err(CustomerFormError::EmptyField(field));
    }
    Ok(sanitized)
}
