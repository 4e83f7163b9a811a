use actix_web::{HttpResponse, Responder, get, patch, post, web};

use crate::forms::products::AddProductForm;
use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::products as product_service;

#[get("/product")]
pub async fn show_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match product_service::load_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => failure("list products", err),
    }
}

#[post("/product")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match product_service::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => failure("create product", err),
    }
}

#[get("/product/search/{name}")]
pub async fn find_products(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let name = path.into_inner();

    match product_service::search_products(repo.get_ref(), &name) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => failure("search products", err),
    }
}

#[patch("/product/{product_id}/archive")]
pub async fn archive_product_by_id(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match product_service::archive_product(repo.get_ref(), product_id) {
        Ok(product) => {
            log::info!("Product {product_id} archived");
            HttpResponse::Ok().json(product)
        }
        Err(err) => failure(&format!("archive product {product_id}"), err),
    }
}
