use std::future::Future;
use std::pin::Pin;

use actix_session::SessionExt;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use crate::auth::session;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user::{self, User};

/// The authenticated caller, resolved from the session cookie.
///
/// Extraction fails with `401 Not authenticated` when there is no session,
/// the user no longer exists, or the account is inactive.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn is_superuser(&self) -> bool {
        self.0.is_superuser
    }

    /// Owners and superusers may act on a resource; nobody else.
    pub fn can_access(&self, owner_id: i64) -> bool {
        self.0.is_superuser || self.0.id == owner_id
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();
        let pool = req.app_data::<web::Data<DbPool>>().cloned();

        Box::pin(async move {
            let pool = pool.ok_or_else(|| AppError::Session("database pool not configured".into()))?;
            let user_id = session::get_user_id(&session)?.ok_or(AppError::Unauthorized)?;

            match user::find_by_id(&pool, user_id).await? {
                Some(u) if u.is_active => Ok(CurrentUser(u)),
                Some(_) => {
                    log::warn!("Inactive user {user_id} presented a session");
                    Err(AppError::Unauthorized)
                }
                None => {
                    session.purge();
                    Err(AppError::Unauthorized)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(id: i64, is_superuser: bool) -> CurrentUser {
        CurrentUser(User {
            id,
            email: format!("user{id}@example.com"),
            full_name: String::new(),
            hashed_password: String::new(),
            is_active: true,
            is_superuser,
        })
    }

    #[test]
    fn owner_can_access() {
        assert!(caller(7, false).can_access(7));
    }

    #[test]
    fn stranger_cannot_access() {
        assert!(!caller(7, false).can_access(8));
    }

    #[test]
    fn superuser_can_access_anything() {
        assert!(caller(1, true).can_access(8));
    }
}
