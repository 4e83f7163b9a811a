use diesel::prelude::*;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::{DieselRepository, RepositoryResult, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let db_tags = tags::table.order(tags::id.asc()).load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }
}
