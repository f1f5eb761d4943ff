use actix_web::{HttpResponse, web};

use crate::auth::{CurrentUser, password, validate};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user::{self, NewUser, UserCreate, UserPublic};

pub const MSG_EMAIL_TAKEN: &str = "The user with this email already exists in the system";

/// A UNIQUE hit on `email` becomes the duplicate-email 400; anything else stays a 500.
/// Catches a concurrent create that slips past the lookup in `create`.
pub fn map_insert_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::BadRequest(MSG_EMAIL_TAKEN.to_string())
        }
        other => AppError::Db(other),
    }
}

/// GET /api/v1/users/me
pub async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(UserPublic::from(user.0))
}

/// POST /api/v1/users - Superuser only.
pub async fn create(
    pool: web::Data<DbPool>,
    caller: CurrentUser,
    body: web::Json<UserCreate>,
) -> Result<HttpResponse, AppError> {
    if !caller.is_superuser() {
        return Err(AppError::PermissionDenied);
    }

    let mut errors = Vec::new();
    errors.extend(validate::validate_email(&body.email));
    errors.extend(validate::validate_password(&body.password));
    errors.extend(validate::validate_optional(&body.full_name, "Full name", 255));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if user::find_by_email(&pool, &body.email).await?.is_some() {
        return Err(AppError::BadRequest(MSG_EMAIL_TAKEN.to_string()));
    }

    let hashed = password::hash_password(&body.password).map_err(AppError::Hash)?;
    let new_user = NewUser {
        email: body.email.clone(),
        full_name: body.full_name.clone(),
        hashed_password: hashed,
        is_superuser: body.is_superuser,
    };
    let created_id = user::create(&pool, &new_user)
        .await
        .map_err(map_insert_error)?;
    log::info!("User {created_id} created by user {}", caller.id());

    let created = user::find_by_id(&pool, created_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(UserPublic::from(created)))
}
