use serde::{Deserialize, Serialize};

/// Rated feedback attached to a single product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFeedback {
    /// Unique identifier of the feedback entry.
    pub id: i32,
    /// Product the feedback refers to.
    pub product_id: i32,
    /// Free-form comment text.
    pub comment: String,
    /// Rating between 1 and 5 inclusive.
    pub rating: i32,
}

/// Payload required to insert product feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductFeedback {
    pub product_id: i32,
    pub comment: String,
    pub rating: i32,
}

impl NewProductFeedback {
    pub fn new(product_id: i32, comment: impl Into<String>, rating: i32) -> Self {
        Self {
            product_id,
            comment: comment.into(),
            rating,
        }
    }
}

/// Query definition used to list feedback for a product.
#[derive(Debug, Clone)]
pub struct ProductFeedbackListQuery {
    /// Product whose feedback should be returned.
    pub product_id: i32,
}

impl ProductFeedbackListQuery {
    /// Construct a query that targets all feedback for `product_id`.
    pub fn new(product_id: i32) -> Self {
        Self { product_id }
    }
}
