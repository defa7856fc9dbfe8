use diesel::prelude::*;

use crate::{
    domain::category::{CarCategory as DomainCarCategory, NewCarCategory as DomainNewCarCategory},
    models::category::{CarCategory as DbCarCategory, NewCarCategory as DbNewCarCategory},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{CategoryReader, CategoryWriter, DieselRepository},
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCarCategory>> {
        use crate::schema::car_categories;

        let mut conn = self.conn()?;
        let category = car_categories::table
            .filter(car_categories::id.eq(id))
            .first::<DbCarCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(&self) -> RepositoryResult<Vec<DomainCarCategory>> {
        use crate::schema::car_categories;

        let mut conn = self.conn()?;
        let categories = car_categories::table
            .order((car_categories::name.asc(), car_categories::id.asc()))
            .load::<DbCarCategory>(&mut conn)?;

        Ok(categories.into_iter().map(Into::into).collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCarCategory,
    ) -> RepositoryResult<DomainCarCategory> {
        use crate::schema::car_categories;

        let mut conn = self.conn()?;
        let db_new = DbNewCarCategory::from(new_category);

        let created = diesel::insert_into(car_categories::table)
            .values(&db_new)
            .get_result::<DbCarCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::car_categories;

        let mut conn = self.conn()?;

        let target = car_categories::table.filter(car_categories::id.eq(category_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
