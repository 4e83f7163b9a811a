//! JSON request payloads and their conversion into domain insert payloads.
//!
//! Text fields are handed to the domain exactly as submitted.

pub mod categories;
pub mod feedback;
pub mod product_feedback;
pub mod products;
pub mod tags;
