use serde::Deserialize;

use crate::domain::category::NewCategory;

/// Body of `POST /category`.
#[derive(Debug, Deserialize)]
pub struct AddCategoryForm {
    /// Name entered by the user.
    pub name: String,
}

impl AddCategoryForm {
    /// Converts the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> NewCategory {
        NewCategory::new(self.name)
    }
}
