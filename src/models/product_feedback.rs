use diesel::prelude::*;

use crate::domain::product_feedback::{
    NewProductFeedback as DomainNewProductFeedback, ProductFeedback as DomainProductFeedback,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_feedback)]
pub struct ProductFeedback {
    pub id: i32,
    pub product_id: i32,
    pub comment: String,
    pub rating: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_feedback)]
pub struct NewProductFeedback<'a> {
    pub product_id: i32,
    pub comment: &'a str,
    pub rating: i32,
}

impl From<ProductFeedback> for DomainProductFeedback {
    fn from(value: ProductFeedback) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            comment: value.comment,
            rating: value.rating,
        }
    }
}

impl<'a> From<&'a DomainNewProductFeedback> for NewProductFeedback<'a> {
    fn from(value: &'a DomainNewProductFeedback) -> Self {
        Self {
            product_id: value.product_id,
            comment: value.comment.as_str(),
            rating: value.rating,
        }
    }
}
