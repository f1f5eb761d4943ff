use serde::{Deserialize, Serialize};

/// Internal user row, including the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Public representation; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl From<User> for UserPublic {
    fn from(u: User) -> Self {
        UserPublic {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            is_active: u.is_active,
            is_superuser: u.is_superuser,
        }
    }
}

/// New user data for creation. `hashed_password` must already be hashed.
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub is_superuser: bool,
}

/// Body of `POST /api/v1/users`.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Body of `POST /api/v1/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
