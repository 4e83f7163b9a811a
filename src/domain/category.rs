use serde::{Deserialize, Serialize};

/// Domain representation of a product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category. Unique across all categories.
    pub name: String,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
}

impl NewCategory {
    /// Construct a new category payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional exact, case-sensitive name filter.
    pub name: Option<String>,
}

impl CategoryListQuery {
    /// Construct a query that targets all categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to the category named exactly `name`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
