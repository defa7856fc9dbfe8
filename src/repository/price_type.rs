use diesel::prelude::*;

use crate::{
    domain::price_type::{NewPriceType as DomainNewPriceType, PriceType as DomainPriceType},
    models::price_type::{NewPriceType as DbNewPriceType, PriceType as DbPriceType},
    repository::errors::RepositoryResult,
    repository::{DieselRepository, PriceTypeReader, PriceTypeWriter},
};

impl PriceTypeReader for DieselRepository {
    fn list_price_types(&self) -> RepositoryResult<Vec<DomainPriceType>> {
        use crate::schema::price_types;

        let mut conn = self.conn()?;
        let items = price_types::table
            .order(price_types::type_name.asc())
            .load::<DbPriceType>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl PriceTypeWriter for DieselRepository {
    fn create_price_type(
        &self,
        new_price_type: &DomainNewPriceType,
    ) -> RepositoryResult<DomainPriceType> {
        use crate::schema::price_types;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(price_types::table)
            .values(&DbNewPriceType::from(new_price_type))
            .get_result::<DbPriceType>(&mut conn)?;

        Ok(created.into())
    }
}
