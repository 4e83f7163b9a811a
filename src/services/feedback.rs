use crate::domain::feedback::{Feedback, FeedbackListQuery};
use crate::forms::feedback::{AddFeedbackForm, FeedbackSearchQuery};
use crate::repository::{FeedbackReader, FeedbackWriter, RepositoryError};
use crate::services::validation::{duplicate_name_message, ensure_unique_name};
use crate::services::{ServiceError, ServiceResult};

/// Creates a feedback record, rejecting names that are already taken.
pub fn create_feedback<R>(repo: &R, form: AddFeedbackForm) -> ServiceResult<Feedback>
where
    R: FeedbackReader + FeedbackWriter + ?Sized,
{
    let new_feedback = form.into_new_feedback();

    let existing = repo
        .list_feedback(FeedbackListQuery::new().name(&new_feedback.name))
        .map_err(ServiceError::from)?;
    ensure_unique_name(&existing, &new_feedback.name)?;

    // The unique index still guards against a concurrent insert of the same name.
    repo.create_feedback(&new_feedback)
        .map_err(|err| match err {
            RepositoryError::UniqueViolation(_) => {
                ServiceError::Conflict(duplicate_name_message::<Feedback>(&new_feedback.name))
            }
            other => ServiceError::from(other),
        })
}

/// Returns feedback whose name contains the query, ordered by id.
pub fn search_feedback<R>(repo: &R, query: FeedbackSearchQuery) -> ServiceResult<Vec<Feedback>>
where
    R: FeedbackReader + ?Sized,
{
    let matches = repo
        .list_feedback(FeedbackListQuery::new().search(query.query))
        .map_err(ServiceError::from)?;

    if matches.is_empty() {
        return Err(ServiceError::NotFound(
            "No feedbacks found with that name.".to_string(),
        ));
    }

    Ok(matches)
}
