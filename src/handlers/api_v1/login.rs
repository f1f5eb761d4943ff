use std::net::{IpAddr, Ipv4Addr};

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use super::Message;
use crate::auth::{CurrentUser, password, rate_limit::RateLimiter, session};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user::{self, LoginRequest, UserPublic};

const MSG_BAD_CREDENTIALS: &str = "Incorrect email or password";

/// POST /api/v1/login - Verify credentials and start a cookie session.
pub async fn login(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    session: Session,
    limiter: web::Data<RateLimiter>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // Rate-limit check BEFORE any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}: too many failed attempts");
        return Err(AppError::TooManyRequests);
    }

    let found = user::find_by_email(&pool, &body.email).await?;
    let Some(u) = found else {
        limiter.record_failure(ip);
        return Err(AppError::BadRequest(MSG_BAD_CREDENTIALS.to_string()));
    };

    if !password::verify_password(&body.password, &u.hashed_password).map_err(AppError::Hash)? {
        limiter.record_failure(ip);
        log::info!("Failed login for user {}", u.id);
        return Err(AppError::BadRequest(MSG_BAD_CREDENTIALS.to_string()));
    }
    if !u.is_active {
        return Err(AppError::BadRequest("Inactive user".to_string()));
    }

    limiter.clear(ip);
    session::login(&session, u.id)?;
    log::info!("User {} logged in", u.id);

    Ok(HttpResponse::Ok().json(UserPublic::from(u)))
}

/// POST /api/v1/logout
pub async fn logout(user: CurrentUser, session: Session) -> HttpResponse {
    session::logout(&session);
    log::info!("User {} logged out", user.id());
    HttpResponse::Ok().json(Message::new("Logged out"))
}
