use crate::domain::category::{Category, CategoryListQuery};
use crate::forms::categories::AddCategoryForm;
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};
use crate::services::validation::{duplicate_name_message, ensure_unique_name};
use crate::services::{ServiceError, ServiceResult};

/// Lists every category ordered by id. An empty store yields an empty list.
pub fn load_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories(CategoryListQuery::new())
        .map_err(ServiceError::from)
}

/// Creates a new category with a name not used by any other category.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let new_category = form.into_new_category();

    let existing = repo
        .list_categories(CategoryListQuery::new().name(&new_category.name))
        .map_err(ServiceError::from)?;
    ensure_unique_name(&existing, &new_category.name)?;

    repo.create_category(&new_category)
        .map_err(|err| match err {
            RepositoryError::UniqueViolation(_) => {
                ServiceError::Conflict(duplicate_name_message::<Category>(&new_category.name))
            }
            other => ServiceError::from(other),
        })
}
