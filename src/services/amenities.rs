use crate::domain::amenity::Amenity;
use crate::forms::amenities::AddAmenityForm;
use crate::repository::{AmenityReader, AmenityWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists the amenity master list ordered by name.
pub fn list_amenities<R>(repo: &R) -> ServiceResult<Vec<Amenity>>
where
    R: AmenityReader + ?Sized,
{
    repo.list_amenities().map_err(ServiceError::from)
}

/// Adds an amenity to the master list.
pub fn create_amenity<R>(repo: &R, form: AddAmenityForm) -> ServiceResult<Amenity>
where
    R: AmenityWriter + ?Sized,
{
    let new_amenity = form
        .into_new_amenity()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_amenity(&new_amenity).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::repository::mock::{MockAmenityReader, MockAmenityWriter};

    fn sample_amenity(id: i32, name: &str) -> Amenity {
        Amenity {
            id,
            name: name.to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn list_amenities_passes_through_rows() {
        let mut repo = MockAmenityReader::new();
        repo.expect_list_amenities()
            .times(1)
            .returning(|| Ok(vec![sample_amenity(1, "Air Conditioning")]));

        let amenities = list_amenities(&repo).expect("expected success");

        assert_eq!(amenities, vec![sample_amenity(1, "Air Conditioning")]);
    }

    #[test]
    fn create_amenity_persists_payload() {
        let mut repo = MockAmenityWriter::new();
        repo.expect_create_amenity()
            .times(1)
            .withf(|payload| payload.name == "Bluetooth")
            .returning(|payload| Ok(sample_amenity(3, &payload.name)));

        let form = AddAmenityForm {
            name: " Bluetooth ".to_string(),
        };

        let amenity = create_amenity(&repo, form).expect("expected success");

        assert_eq!(amenity.id, 3);
    }
}
