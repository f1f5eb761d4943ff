use sqlx::SqlitePool;

use super::types::{NewUser, User};

const SELECT_USER: &str =
    "SELECT id, email, full_name, hashed_password, is_active, is_superuser FROM users";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Find user by email for authentication. Emails are matched case-insensitively.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE email = ?1 COLLATE NOCASE"))
        .bind(email.trim())
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &SqlitePool, new: &NewUser) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (email, full_name, hashed_password, is_superuser) \
         VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(new.email.trim())
    .bind(&new.full_name)
    .bind(&new.hashed_password)
    .bind(new.is_superuser)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

/// Mark a user active or inactive. Inactive users cannot authenticate.
pub async fn set_active(pool: &SqlitePool, id: i64, active: bool) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET is_active = ?1 WHERE id = ?2")
        .bind(active)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
