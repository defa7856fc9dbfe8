use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::amenity::NewAmenity;
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 100;

pub type AmenityFormResult<T> = Result<T, AmenityFormError>;

#[derive(Debug, Error)]
pub enum AmenityFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("amenity name cannot be empty")]
    EmptyName,
}

/// Payload accepted when adding an entry to the amenity master list.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAmenityForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl AddAmenityForm {
    pub fn into_new_amenity(self) -> AmenityFormResult<NewAmenity> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(AmenityFormError::EmptyName);
        }

        Ok(NewAmenity::new(sanitized_name))
    }
}
