use diesel::prelude::*;

use crate::{
    domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer},
    models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer},
    repository::errors::RepositoryResult,
    repository::{CustomerReader, CustomerWriter, DieselRepository},
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::id.eq(id))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let items = customers::table
            .order((
                customers::last_name.asc(),
                customers::first_name.asc(),
                customers::id.asc(),
            ))
            .load::<DbCustomer>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &DomainNewCustomer) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(customers::table)
            .values(&DbNewCustomer::from(new_customer))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }
}
