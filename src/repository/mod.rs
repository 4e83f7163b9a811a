use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryListQuery, NewCategory};
use crate::domain::feedback::{Feedback, FeedbackListQuery, NewFeedback};
use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::domain::product_feedback::{
    NewProductFeedback, ProductFeedback, ProductFeedbackListQuery,
};
use crate::domain::tag::{NewTag, Tag};

pub mod category;
pub mod errors;
pub mod feedback;
pub mod product;
pub mod product_feedback;
pub mod tag;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside a `LIKE` pattern.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Read-only operations over feedback records.
pub trait FeedbackReader {
    /// Feedback matching the query, ordered by id.
    fn list_feedback(&self, query: FeedbackListQuery) -> RepositoryResult<Vec<Feedback>>;
}

/// Write operations over feedback records.
pub trait FeedbackWriter {
    /// Insert feedback and return the stored record.
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
}

/// Read-only operations over categories.
pub trait CategoryReader {
    /// Categories matching the query, ordered by id.
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over categories.
pub trait CategoryWriter {
    /// Insert a category and return the stored record.
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations over tags.
pub trait TagReader {
    /// Every tag, ordered by id.
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
}

/// Write operations over tags.
pub trait TagWriter {
    /// Insert a tag and return the stored record.
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
}

/// Read-only operations over products.
pub trait ProductReader {
    /// Look up a product, `None` if the id is unknown.
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Products matching the query, ordered by id.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over products.
pub trait ProductWriter {
    /// Insert a product and return the stored record.
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Flag the product as archived. Fails with `NotFound` for unknown ids.
    fn archive_product(&self, product_id: i32) -> RepositoryResult<Product>;
}

/// Read-only operations over product feedback.
pub trait ProductFeedbackReader {
    /// Feedback left for the queried product, ordered by id.
    fn list_product_feedback(
        &self,
        query: ProductFeedbackListQuery,
    ) -> RepositoryResult<Vec<ProductFeedback>>;
}

/// Write operations over product feedback.
pub trait ProductFeedbackWriter {
    /// Insert product feedback and return the stored record.
    fn create_product_feedback(
        &self,
        new_feedback: &NewProductFeedback,
    ) -> RepositoryResult<ProductFeedback>;
}
