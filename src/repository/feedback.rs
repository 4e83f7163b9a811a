use diesel::prelude::*;

use crate::domain::feedback::{
    Feedback as DomainFeedback, FeedbackListQuery, NewFeedback as DomainNewFeedback,
};
use crate::models::feedback::{Feedback as DbFeedback, NewFeedback as DbNewFeedback};
use crate::repository::{
    DieselRepository, FeedbackReader, FeedbackWriter, RepositoryResult, contains_pattern,
};

impl FeedbackReader for DieselRepository {
    fn list_feedback(&self, query: FeedbackListQuery) -> RepositoryResult<Vec<DomainFeedback>> {
        use crate::schema::feedback;

        let mut conn = self.conn()?;

        let mut items = feedback::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(name) = query.name.as_ref() {
            items = items.filter(feedback::name.eq(name.clone()));
        }

        if let Some(term) = query.search.as_ref() {
            items = items.filter(feedback::name.like(contains_pattern(term)).escape('\\'));
        }

        let rows = items
            .order(feedback::id.asc())
            .load::<DbFeedback>(&mut conn)?;

        Ok(rows.into_iter().map(DomainFeedback::from).collect())
    }
}

impl FeedbackWriter for DieselRepository {
    fn create_feedback(&self, new_feedback: &DomainNewFeedback) -> RepositoryResult<DomainFeedback> {
        use crate::schema::feedback;

        let mut conn = self.conn()?;
        let insertable = DbNewFeedback::from(new_feedback);

        let created = diesel::insert_into(feedback::table)
            .values(&insertable)
            .get_result::<DbFeedback>(&mut conn)?;

        Ok(created.into())
    }
}
