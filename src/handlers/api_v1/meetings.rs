use actix_web::{HttpResponse, web};

use super::Message;
use crate::auth::CurrentUser;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::meeting::{self, ListParams, Meeting, MeetingCreate, MeetingUpdate, MeetingsPublic};

pub const MSG_DELETED: &str = "Item deleted successfully";

/// Load a meeting and check the caller may act on it.
///
/// Existence is checked first, so a missing id is always `NotFound`
/// and an existing one owned by someone else is `PermissionDenied`.
async fn find_authorized(pool: &DbPool, user: &CurrentUser, id: i64) -> Result<Meeting, AppError> {
    let found = meeting::find_by_id(pool, id).await?.ok_or(AppError::NotFound)?;
    if !user.can_access(found.owner_id) {
        return Err(AppError::PermissionDenied);
    }
    Ok(found)
}

/// GET /api/v1/meetings/ - Superusers see every meeting, others only their own.
/// Query params: skip (default 0), limit (default 100).
pub async fn list(
    pool: web::Data<DbPool>,
    user: CurrentUser,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let ListParams { skip, limit } = query.into_inner();

    let mut errors = Vec::new();
    if skip < 0 {
        errors.push("skip must be greater than or equal to 0".to_string());
    }
    if limit < 0 {
        errors.push("limit must be greater than or equal to 0".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let (count, data) = if user.is_superuser() {
        (
            meeting::count_all(&pool).await?,
            meeting::find_all(&pool, skip, limit).await?,
        )
    } else {
        (
            meeting::count_by_owner(&pool, user.id()).await?,
            meeting::find_by_owner(&pool, user.id(), skip, limit).await?,
        )
    };

    Ok(HttpResponse::Ok().json(MeetingsPublic { data, count }))
}

/// GET /api/v1/meetings/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let found = find_authorized(&pool, &user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(found))
}

/// POST /api/v1/meetings/ - The caller always becomes the owner.
pub async fn create(
    pool: web::Data<DbPool>,
    user: CurrentUser,
    body: web::Json<MeetingCreate>,
) -> Result<HttpResponse, AppError> {
    let errors = validate::validate_meeting_create(&body);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let created = meeting::create(&pool, &body, user.id()).await?;
    log::info!("Meeting {} created by user {}", created.id, user.id());

    Ok(HttpResponse::Ok().json(created))
}

/// PUT /api/v1/meetings/{id} - Partial update; omitted fields keep their value.
pub async fn update(
    pool: web::Data<DbPool>,
    user: CurrentUser,
    path: web::Path<i64>,
    body: web::Json<MeetingUpdate>,
) -> Result<HttpResponse, AppError> {
    let errors = validate::validate_meeting_update(&body);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let meeting_id = path.into_inner();
    find_authorized(&pool, &user, meeting_id).await?;

    // Deleted between the check and the write.
    let updated = meeting::update(&pool, meeting_id, &body)
        .await?
        .ok_or(AppError::NotFound)?;
    log::info!("Meeting {meeting_id} updated by user {}", user.id());

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/meetings/{id}
pub async fn delete(
    pool: web::Data<DbPool>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let meeting_id = path.into_inner();
    find_authorized(&pool, &user, meeting_id).await?;

    if !meeting::delete(&pool, meeting_id).await? {
        return Err(AppError::NotFound);
    }
    log::info!("Meeting {meeting_id} deleted by user {}", user.id());

    Ok(HttpResponse::Ok().json(Message::new(MSG_DELETED)))
}
