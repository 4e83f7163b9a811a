use crate::domain::product_feedback::{ProductFeedback, ProductFeedbackListQuery};
use crate::forms::product_feedback::AddProductFeedbackForm;
use crate::repository::{
    ProductFeedbackReader, ProductFeedbackWriter, ProductReader, RepositoryError,
};
use crate::services::validation::{
    ensure_not_archived, ensure_product_exists, ensure_rating_in_range, product_not_found,
};
use crate::services::{ServiceError, ServiceResult};

/// Records rated feedback for an existing, active product.
///
/// The rating is checked first, so an out-of-range rating is reported even
/// when the product does not exist.
pub fn create_product_feedback<R>(
    repo: &R,
    form: AddProductFeedbackForm,
) -> ServiceResult<ProductFeedback>
where
    R: ProductReader + ProductFeedbackWriter + ?Sized,
{
    let new_feedback = form.into_new_product_feedback();

    ensure_rating_in_range(new_feedback.rating)?;
    let product = ensure_product_exists(repo, new_feedback.product_id)?;
    ensure_not_archived(&product)?;

    repo.create_product_feedback(&new_feedback)
        .map_err(|err| match err {
            RepositoryError::ForeignKeyViolation(_) => product_not_found(),
            other => ServiceError::from(other),
        })
}

/// Lists the feedback left for `product_id`, ordered by id.
pub fn load_product_feedback<R>(repo: &R, product_id: i32) -> ServiceResult<Vec<ProductFeedback>>
where
    R: ProductFeedbackReader + ?Sized,
{
    let feedback = repo
        .list_product_feedback(ProductFeedbackListQuery::new(product_id))
        .map_err(ServiceError::from)?;

    if feedback.is_empty() {
        return Err(ServiceError::NotFound(
            "No feedback found for this product.".to_string(),
        ));
    }

    Ok(feedback)
}
