use crate::domain::customer::Customer;
use crate::forms::customers::AddCustomerForm;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists customers ordered by name.
pub fn list_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_customers().map_err(ServiceError::from)
}

/// Loads a single customer.
pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)?
        .ok_or(ServiceError::NotFound)
}

/// Registers a customer. Duplicate identity documents surface as conflicts.
pub fn create_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let new_customer = form
        .into_new_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let customer = repo
        .create_customer(&new_customer)
        .map_err(ServiceError::from)?;
    log::info!("Registered customer {}", customer.id);

    Ok(customer)
}
