use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::tags::AddTagForm;
use crate::repository::DieselRepository;
use crate::routes::failure;
use crate::services::tags::{create_tag, load_tags};

#[get("/tag")]
pub async fn show_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => failure("list tags", err),
    }
}

#[post("/tag")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    match create_tag(repo.get_ref(), form.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => failure("create tag", err),
    }
}
