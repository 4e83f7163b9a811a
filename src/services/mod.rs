pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod feedback;
pub mod main;
pub mod product_feedback;
pub mod products;
pub mod tags;
pub mod validation;
