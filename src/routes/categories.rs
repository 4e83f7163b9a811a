use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::categories::AddCategoryForm;
use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::categories::{create_category, load_categories};

#[get("/category")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => failure("list categories", err),
    }
}

#[post("/category")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCategoryForm>,
) -> impl Responder {
    match create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => failure("create category", err),
    }
}
