use serde::Deserialize;

use crate::domain::feedback::NewFeedback;

/// Body of `POST /feedback`.
#[derive(Debug, Deserialize)]
pub struct AddFeedbackForm {
    /// Name the feedback is submitted under.
    pub name: String,
    /// Comment text.
    pub comment: String,
}

impl AddFeedbackForm {
    /// Converts the payload into a domain `NewFeedback`.
    pub fn into_new_feedback(self) -> NewFeedback {
        NewFeedback::new(self.name, self.comment)
    }
}

/// Query string of `GET /feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackSearchQuery {
    /// Substring matched against feedback names.
    pub query: String,
}
