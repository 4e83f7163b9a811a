use serde::Deserialize;

use crate::domain::tag::NewTag;

/// Body of `POST /tag`.
#[derive(Debug, Deserialize)]
pub struct AddTagForm {
    /// Name entered by the user.
    pub name: String,
}

impl AddTagForm {
    /// Converts the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> NewTag {
        NewTag::new(self.name)
    }
}
