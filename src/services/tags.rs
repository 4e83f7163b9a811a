use crate::domain::tag::Tag;
use crate::forms::tags::AddTagForm;
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches every tag ordered by id.
pub fn load_tags<R>(repo: &R) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Creates a new tag. Duplicate tag names are allowed.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    repo.create_tag(&form.into_new_tag()).map_err(ServiceError::from)
}
