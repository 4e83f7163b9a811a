use serde::Deserialize;

use crate::domain::product::NewProduct;

/// Body of `POST /product`.
///
/// The quantity is carried through unchecked; the negative case is rejected by
/// the product service so it surfaces as its own error.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    /// Name entered by the user.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Units in stock.
    pub quantity: i32,
    /// Accepted for compatibility with older clients. New products always
    /// start active.
    #[serde(default)]
    pub is_archived: bool,
}

impl AddProductForm {
    /// Converts the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct::new(self.name, self.description, self.quantity)
    }
}
