use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::auth::password;
use crate::errors::AppError;
use crate::models::user::{self, NewUser};

pub type DbPool = SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!();

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the initial superuser if no user with that email exists yet.
/// Returns the id of the (new or existing) account.
pub async fn seed_superuser(pool: &DbPool, email: &str, password: &str) -> Result<i64, AppError> {
    if let Some(existing) = user::find_by_email(pool, email).await? {
        log::info!("Superuser {email} already present, skipping seed");
        return Ok(existing.id);
    }

    let hashed = password::hash_password(password).map_err(AppError::Hash)?;
    let id = user::create(
        pool,
        &NewUser {
            email: email.to_string(),
            full_name: String::new(),
            hashed_password: hashed,
            is_superuser: true,
        },
    )
    .await?;
    log::info!("Seeded superuser {email} (id={id})");
    Ok(id)
}
