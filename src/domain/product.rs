use serde::{Deserialize, Serialize};

/// Domain representation of a product that can collect feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to users.
    pub description: String,
    /// Units in stock. Never negative.
    pub quantity: i32,
    /// Archived products no longer accept feedback. Archiving is one-way.
    pub is_archived: bool,
}

/// Payload required to insert a new product. New products are never archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to users.
    pub description: String,
    /// Units in stock.
    pub quantity: i32,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(name: impl Into<String>, description: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            quantity,
        }
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
}

impl ProductListQuery {
    /// Construct a query that targets all products, archived ones included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
