//! Business rules checked by the request handlers before touching the store.
//!
//! Every check returns a [`ServiceResult`] so handlers can chain them with `?`.

use crate::domain::category::Category;
use crate::domain::feedback::Feedback;
use crate::domain::product::Product;
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Lowest accepted product feedback rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted product feedback rating.
pub const MAX_RATING: i32 = 5;

/// Records whose name must be unique within their kind.
pub trait Named {
    /// Label used in conflict messages, e.g. `Feedback`.
    const KIND: &'static str;

    /// Name compared against candidates, exactly as stored.
    fn name(&self) -> &str;
}

impl Named for Feedback {
    const KIND: &'static str = "Feedback";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Category {
    const KIND: &'static str = "Category";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Message reported when `name` is already taken by a record of kind `T`.
pub fn duplicate_name_message<T: Named>(name: &str) -> String {
    format!("{} with this name '{name}' already exists.", T::KIND)
}

/// Fails with `Conflict` when any of `existing` is named exactly `candidate`.
/// The comparison is case-sensitive.
pub fn ensure_unique_name<T: Named>(existing: &[T], candidate: &str) -> ServiceResult<()> {
    if existing.iter().any(|record| record.name() == candidate) {
        return Err(ServiceError::Conflict(duplicate_name_message::<T>(candidate)));
    }
    Ok(())
}

/// Fails with `InvalidInput` for negative stock quantities.
pub fn ensure_non_negative(quantity: i32) -> ServiceResult<()> {
    if quantity < 0 {
        return Err(ServiceError::InvalidInput(
            "Quantity cannot be negative.".to_string(),
        ));
    }
    Ok(())
}

/// Fails with `InvalidInput` unless `rating` lies within 1..=5.
pub fn ensure_rating_in_range(rating: i32) -> ServiceResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ServiceError::InvalidInput(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}."
        )));
    }
    Ok(())
}

/// Loads the product with `product_id`, failing with `NotFound` when absent.
pub fn ensure_product_exists<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(product_not_found)
}

/// Fails with `InvalidInput` when the product no longer accepts feedback.
pub fn ensure_not_archived(product: &Product) -> ServiceResult<()> {
    if product.is_archived {
        return Err(ServiceError::InvalidInput(
            "Cannot add feedback to an archived product.".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn product_not_found() -> ServiceError {
    ServiceError::NotFound("Product not found.".to_string())
}
