use diesel::prelude::*;

use crate::domain::feedback::{Feedback as DomainFeedback, NewFeedback as DomainNewFeedback};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::feedback)]
pub struct Feedback {
    pub id: i32,
    pub name: String,
    pub comment: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::feedback)]
pub struct NewFeedback<'a> {
    pub name: &'a str,
    pub comment: &'a str,
}

impl From<Feedback> for DomainFeedback {
    fn from(value: Feedback) -> Self {
        Self {
            id: value.id,
            name: value.name,
            comment: value.comment,
        }
    }
}

impl<'a> From<&'a DomainNewFeedback> for NewFeedback<'a> {
    fn from(value: &'a DomainNewFeedback) -> Self {
        Self {
            name: value.name.as_str(),
            comment: value.comment.as_str(),
        }
    }
}
