pub mod login;
pub mod meetings;
pub mod users;

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::auth::middleware::require_json_content_type;
use crate::errors::AppError;

/// Plain `{"message": ...}` acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Message { message: message.to_string() }
    }
}

/// Extractor failures (bad JSON, bad query string, non-numeric id) become 422s
/// in the same `{"detail": [...]}` shape as handler-level validation.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(vec![err.to_string()]).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::Validation(vec![err.to_string()]).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::Validation(vec![err.to_string()]).into()
    }));
}

/// Configure API v1 routes. Mount under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);

    cfg.service(
        web::scope("/meetings")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(meetings::list))
            .route("/", web::get().to(meetings::list))
            .route("", web::post().to(meetings::create))
            .route("/", web::post().to(meetings::create))
            .route("/{id}", web::get().to(meetings::read))
            .route("/{id}", web::put().to(meetings::update))
            .route("/{id}", web::delete().to(meetings::delete)),
    );
    cfg.service(
        web::scope("/users")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::post().to(users::create))
            .route("/", web::post().to(users::create))
            .route("/me", web::get().to(users::me)),
    );
    cfg.service(
        web::resource("/login")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route(web::post().to(login::login)),
    );
    cfg.service(web::resource("/logout").route(web::post().to(login::logout)));
}

/// JSON 404 for anything unmatched.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "detail": "Not Found" }))
}
