use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

pub const MSG_NOT_FOUND: &str = "Item not found";
pub const MSG_PERMISSION_DENIED: &str = "Not enough permissions";
pub const MSG_UNAUTHORIZED: &str = "Not authenticated";
pub const MSG_TOO_MANY_REQUESTS: &str = "Too many failed login attempts. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Hash(String),
    Session(String),
    NotFound,
    /// Caller is authenticated but neither owner nor superuser.
    PermissionDenied,
    Unauthorized,
    BadRequest(String),
    Validation(Vec<String>),
    TooManyRequests,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::NotFound => write!(f, "{MSG_NOT_FOUND}"),
            AppError::PermissionDenied => write!(f, "{MSG_PERMISSION_DENIED}"),
            AppError::Unauthorized => write!(f, "{MSG_UNAUTHORIZED}"),
            AppError::BadRequest(msg) => write!(f, "{msg}"),
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors.join("; ")),
            AppError::TooManyRequests => write!(f, "{MSG_TOO_MANY_REQUESTS}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            // 400 rather than 403: existing clients depend on it.
            AppError::PermissionDenied | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            AppError::Db(_) | AppError::Hash(_) | AppError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            AppError::Validation(errors) => serde_json::json!({ "detail": errors }),
            AppError::Db(_) | AppError::Hash(_) | AppError::Session(_) => {
                log::error!("{self}");
                serde_json::json!({ "detail": "Internal Server Error" })
            }
            _ => serde_json::json!({ "detail": self.to_string() }),
        };
        HttpResponse::build(status).json(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<actix_session::SessionGetError> for AppError {
    fn from(e: actix_session::SessionGetError) -> Self {
        AppError::Session(e.to_string())
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(e: actix_session::SessionInsertError) -> Self {
        AppError::Session(e.to_string())
    }
}
