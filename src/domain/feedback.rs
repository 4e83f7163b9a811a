use serde::{Deserialize, Serialize};

/// Named feedback left by a visitor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    /// Unique identifier of the feedback record.
    pub id: i32,
    /// Name the feedback was submitted under. Unique across all feedback.
    pub name: String,
    /// Free-form comment text.
    pub comment: String,
}

/// Payload required to insert a new feedback record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub comment: String,
}

impl NewFeedback {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
        }
    }
}

/// Query definition used to look up feedback records.
#[derive(Debug, Clone, Default)]
pub struct FeedbackListQuery {
    /// Optional exact, case-sensitive name filter.
    pub name: Option<String>,
    /// Optional substring search applied to the name.
    pub search: Option<String>,
}

impl FeedbackListQuery {
    /// Construct a query that targets every feedback record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to records whose name equals `name` exactly.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter the results to records whose name contains `term`.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
