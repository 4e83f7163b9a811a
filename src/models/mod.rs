pub mod category;
pub mod feedback;
pub mod product;
pub mod product_feedback;
pub mod tag;
