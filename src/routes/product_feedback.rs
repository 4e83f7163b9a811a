use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::product_feedback::AddProductFeedbackForm;
use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::product_feedback::{create_product_feedback, load_product_feedback};

#[post("/product/feedback")]
pub async fn add_product_feedback(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductFeedbackForm>,
) -> impl Responder {
    match create_product_feedback(repo.get_ref(), form.into_inner()) {
        Ok(feedback) => HttpResponse::Ok().json(feedback),
        Err(err) => failure("create product feedback", err),
    }
}

#[get("/product/feedback/{product_id}")]
pub async fn show_product_feedback(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match load_product_feedback(repo.get_ref(), product_id) {
        Ok(feedback) => HttpResponse::Ok().json(feedback),
        Err(err) => failure(&format!("list feedback for product {product_id}"), err),
    }
}
