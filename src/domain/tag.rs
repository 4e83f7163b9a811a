use serde::{Deserialize, Serialize};

/// Domain representation of a free-form tag. Names are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag.
    pub name: String,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Human-readable name of the tag.
    pub name: String,
}

impl NewTag {
    /// Construct a new tag payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
