use actix_web::{HttpResponse, Responder, get};

use crate::services::main::welcome;

#[get("/")]
pub async fn show_index() -> impl Responder {
    HttpResponse::Ok().json(welcome())
}
