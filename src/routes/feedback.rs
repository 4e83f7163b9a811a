use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::feedback::{AddFeedbackForm, FeedbackSearchQuery};
use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::feedback::{create_feedback, search_feedback};

#[post("/feedback")]
pub async fn add_feedback(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddFeedbackForm>,
) -> impl Responder {
    match create_feedback(repo.get_ref(), form.into_inner()) {
        Ok(feedback) => HttpResponse::Ok().json(feedback),
        Err(err) => failure("create feedback", err),
    }
}

#[get("/feedback")]
pub async fn find_feedback(
    params: web::Query<FeedbackSearchQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_feedback(repo.get_ref(), params.into_inner()) {
        Ok(feedback) => HttpResponse::Ok().json(feedback),
        Err(err) => failure("search feedback", err),
    }
}
