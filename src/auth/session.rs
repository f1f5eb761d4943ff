use actix_session::config::CookieContentSecurity;
use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::errors::AppError;

const USER_ID_KEY: &str = "user_id";

/// Cookie-backed session middleware used by both the server and the tests.
pub fn middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Pick the signing key: `SESSION_KEY` if long enough, else a random one.
pub fn key_from_config(configured: Option<&str>) -> Key {
    match configured {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

pub fn get_user_id(session: &Session) -> Result<Option<i64>, AppError> {
    Ok(session.get::<i64>(USER_ID_KEY)?)
}

/// Start a fresh authenticated session for `user_id`.
pub fn login(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.renew();
    session.insert(USER_ID_KEY, user_id)?;
    Ok(())
}

pub fn logout(session: &Session) {
    session.purge();
}
