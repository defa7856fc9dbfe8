use crate::domain::price_type::PriceType;
use crate::forms::price_types::AddPriceTypeForm;
use crate::repository::{PriceTypeReader, PriceTypeWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists registered price types ordered by name.
pub fn list_price_types<R>(repo: &R) -> ServiceResult<Vec<PriceType>>
where
    R: PriceTypeReader + ?Sized,
{
    repo.list_price_types().map_err(ServiceError::from)
}

/// Registers a price type for a known tier.
pub fn create_price_type<R>(repo: &R, form: AddPriceTypeForm) -> ServiceResult<PriceType>
where
    R: PriceTypeWriter + ?Sized,
{
    let new_price_type = form
        .into_new_price_type()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_price_type(&new_price_type)
        .map_err(ServiceError::from)
}
