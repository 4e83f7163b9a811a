use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::AddProductForm;
use crate::repository::{ProductReader, ProductWriter, RepositoryError};
use crate::services::validation::{ensure_non_negative, product_not_found};
use crate::services::{ServiceError, ServiceResult};

/// Lists every product, archived ones included.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(ProductListQuery::new())
        .map_err(ServiceError::from)
}

/// Returns the products whose name contains `name`, ignoring case.
pub fn search_products<R>(repo: &R, name: &str) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let products = repo
        .list_products(ProductListQuery::new().search(name))
        .map_err(ServiceError::from)?;

    if products.is_empty() {
        return Err(ServiceError::NotFound(
            "No products found with that name.".to_string(),
        ));
    }

    Ok(products)
}

/// Creates a new, active product.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if form.is_archived {
        log::debug!("ignoring is_archived on product creation");
    }

    let new_product = form.into_new_product();

    ensure_non_negative(new_product.quantity)?;

    repo.create_product(&new_product)
        .map_err(ServiceError::from)
}

/// Archives the product. Archiving an archived product succeeds unchanged.
pub fn archive_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    repo.archive_product(product_id).map_err(|err| match err {
        RepositoryError::NotFound => product_not_found(),
        other => ServiceError::from(other),
    })
}
