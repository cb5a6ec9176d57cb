use crate::domain::category::Category;
use crate::forms::categories::CreateCategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })
}

pub fn create_category<R>(payload: CreateCategoryFormPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(category) => Ok(category),
        Err(RepositoryError::UniqueViolation(e)) => {
            log::warn!("Rejected category with duplicate slug '{}': {e}", category.slug);
            Err(ServiceError::DuplicateSlug {
                entity: "category",
                slug: category.slug.into_inner(),
            })
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
