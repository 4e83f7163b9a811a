use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryResult, contains_pattern,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(DomainProduct::from))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        // SQLite `LIKE` already ignores ASCII case.
        if let Some(term) = query.search.as_ref() {
            items = items.filter(products::name.like(contains_pattern(term)).escape('\\'));
        }

        let db_products = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        Ok(db_products.into_iter().map(DomainProduct::from).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn archive_product(&self, product_id: i32) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let target = products::table.filter(products::id.eq(product_id));

        // Diesel reports `NotFound` when the update touches no row.
        let updated = diesel::update(target)
            .set(products::is_archived.eq(true))
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }
}
