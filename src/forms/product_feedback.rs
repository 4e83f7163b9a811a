use serde::Deserialize;

use crate::domain::product_feedback::NewProductFeedback;

/// Body of `POST /product/feedback`. The rating range is enforced by the
/// product feedback service.
#[derive(Debug, Deserialize)]
pub struct AddProductFeedbackForm {
    /// Product the feedback refers to.
    pub product_id: i32,
    /// Comment text.
    pub comment: String,
    /// Rating submitted by the user.
    pub rating: i32,
}

impl AddProductFeedbackForm {
    /// Converts the payload into a domain `NewProductFeedback`.
    pub fn into_new_product_feedback(self) -> NewProductFeedback {
        NewProductFeedback::new(self.product_id, self.comment, self.rating)
    }
}
