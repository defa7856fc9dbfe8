use crate::domain::category::CarCategory;
use crate::forms::categories::AddCategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists all car categories ordered by name.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CarCategory>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Creates a new car category.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<CarCategory>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Deletes a car category. Cars in the category keep existing without one.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};

    fn sample_category(id: i32, name: &str) -> CarCategory {
        CarCategory {
            id,
            name: name.to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn list_categories_returns_repository_rows() {
        let mut repo = MockCategoryReader::new();
        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![sample_category(1, "Hatchback"), sample_category(2, "SUV")]));

        let categories = list_categories(&repo).expect("expected success");

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].name, "SUV");
    }

    #[test]
    fn create_category_persists_sanitized_name() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_create_category()
            .times(1)
            .withf(|payload| payload.name == "Luxury Sedan")
            .returning(|payload| Ok(sample_category(4, &payload.name)));

        let form = AddCategoryForm {
            name: "  Luxury   Sedan ".to_string(),
        };

        let category = create_category(&repo, form).expect("expected success");

        assert_eq!(category.id, 4);
        assert_eq!(category.name, "Luxury Sedan");
    }

    #[test]
    fn create_category_maps_duplicates_to_conflict() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_create_category().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: car_categories.name".to_string(),
            ))
        });

        let form = AddCategoryForm {
            name: "SUV".to_string(),
        };

        assert!(matches!(
            create_category(&repo, form),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn create_category_rejects_blank_name_without_touching_repository() {
        let repo = MockCategoryWriter::new();
        let form = AddCategoryForm {
            name: "   ".to_string(),
        };

        assert!(matches!(
            create_category(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn remove_category_reports_missing_category() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_delete_category()
            .withf(|id| *id == 9)
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            remove_category(&repo, 9),
            Err(ServiceError::NotFound)
        ));
    }
}
