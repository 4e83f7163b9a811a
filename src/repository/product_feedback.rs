use diesel::prelude::*;

use crate::domain::product_feedback::{
    NewProductFeedback as DomainNewProductFeedback, ProductFeedback as DomainProductFeedback,
    ProductFeedbackListQuery,
};
use crate::models::product_feedback::{
    NewProductFeedback as DbNewProductFeedback, ProductFeedback as DbProductFeedback,
};
use crate::repository::{
    DieselRepository, ProductFeedbackReader, ProductFeedbackWriter, RepositoryResult,
};

impl ProductFeedbackReader for DieselRepository {
    fn list_product_feedback(
        &self,
        query: ProductFeedbackListQuery,
    ) -> RepositoryResult<Vec<DomainProductFeedback>> {
        use crate::schema::product_feedback;

        let mut conn = self.conn()?;

        let rows = product_feedback::table
            .filter(product_feedback::product_id.eq(query.product_id))
            .order(product_feedback::id.asc())
            .load::<DbProductFeedback>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductFeedback::from).collect())
    }
}

impl ProductFeedbackWriter for DieselRepository {
    fn create_product_feedback(
        &self,
        new_feedback: &DomainNewProductFeedback,
    ) -> RepositoryResult<DomainProductFeedback> {
        use crate::schema::product_feedback;

        let mut conn = self.conn()?;
        let insertable = DbNewProductFeedback::from(new_feedback);

        let created = diesel::insert_into(product_feedback::table)
            .values(&insertable)
            .get_result::<DbProductFeedback>(&mut conn)?;

        Ok(created.into())
    }
}
