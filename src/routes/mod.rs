//! HTTP surface: maps method and path onto the services and renders JSON.

use actix_web::{HttpResponse, error, web};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

pub mod categories;
pub mod feedback;
pub mod main;
pub mod product_feedback;
pub mod products;
pub mod tags;

/// JSON body attached to every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

/// Registers every endpoint together with the extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(main::show_index)
        .service(feedback::add_feedback)
        .service(feedback::find_feedback)
        .service(categories::add_category)
        .service(categories::show_categories)
        .service(tags::add_tag)
        .service(tags::show_tags)
        .service(product_feedback::add_product_feedback)
        .service(product_feedback::show_product_feedback)
        .service(products::add_product)
        .service(products::show_products)
        .service(products::find_products)
        .service(products::archive_product_by_id);
}

/// Converts a service failure into the matching status code and `detail` body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ErrorBody {
        detail: err.to_string(),
    };

    match err {
        ServiceError::Conflict(_) | ServiceError::InvalidInput(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Logs the failure of `action` and renders it.
pub(crate) fn failure(action: &str, err: ServiceError) -> HttpResponse {
    match &err {
        ServiceError::Internal(message) => log::error!("Failed to {action}: {message}"),
        other => log::debug!("Rejected {action}: {other}"),
    }
    error_response(&err)
}

fn unprocessable(detail: String) -> error::Error {
    let response = HttpResponse::UnprocessableEntity().json(ErrorBody {
        detail: detail.clone(),
    });
    error::InternalError::from_response(detail, response).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| unprocessable(err.to_string()))
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| unprocessable(err.to_string()))
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| unprocessable(err.to_string()))
}
