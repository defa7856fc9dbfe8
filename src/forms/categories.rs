use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCarCategory;
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: usize = 100;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category forms.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Payload accepted when creating a car category.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCarCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCarCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(NewCarCategory::new(sanitized_name))
    }
}
