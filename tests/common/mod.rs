//! Shared test infrastructure.
//!
//! - `setup_test_db()` - in-memory SQLite with migrations applied
//! - `create_random_user()` / `create_random_meeting()` - fixture rows
//! - `test_app!` / `login!` - an HTTP service wired like `main`, plus a session cookie
#![allow(dead_code, unused_macros)]

use rand::Rng;
use rand::distr::Alphanumeric;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use meetings::auth::password;
use meetings::db;
use meetings::models::meeting::{self, Meeting, MeetingCreate};
use meetings::models::user::{self, NewUser, User};

// ============================================================================
// DATABASE SETUP
// ============================================================================

pub struct TestDb {
    pool: SqlitePool,
}

impl TestDb {
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Every connection to `sqlite::memory:` is its own database, so the pool
/// is pinned to a single connection that never expires.
pub async fn setup_test_db() -> TestDb {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory DB");
    db::run_migrations(&pool).await.expect("Failed to run migrations");
    TestDb { pool }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub const TEST_PASSWORD: &str = "Password1!";

pub fn random_lower_string() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

pub fn random_email() -> String {
    format!("{}@{}.com", random_lower_string(), random_lower_string())
}

/// Insert a user whose password is [`TEST_PASSWORD`].
pub async fn create_random_user(pool: &SqlitePool, is_superuser: bool) -> User {
    let hashed = password::hash_password(TEST_PASSWORD).expect("hash");
    let id = user::create(
        pool,
        &NewUser {
            email: random_email(),
            full_name: String::new(),
            hashed_password: hashed,
            is_superuser,
        },
    )
    .await
    .expect("create user");
    user::find_by_id(pool, id).await.expect("query").expect("user row")
}

pub async fn create_meeting_for(pool: &SqlitePool, owner_id: i64) -> Meeting {
    let new = MeetingCreate {
        title: random_lower_string(),
        agenda: random_lower_string(),
        summary: random_lower_string(),
    };
    meeting::create(pool, &new, owner_id).await.expect("create meeting")
}

/// A meeting owned by a freshly created, non-superuser owner.
pub async fn create_random_meeting(pool: &SqlitePool) -> Meeting {
    let owner = create_random_user(pool, false).await;
    create_meeting_for(pool, owner.id).await
}

// ============================================================================
// HTTP
// ============================================================================

/// Build the service the way `main` does, against the given pool.
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(meetings::auth::session::middleware(
                    actix_web::cookie::Key::generate(),
                ))
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new(
                    meetings::auth::rate_limit::RateLimiter::new(),
                ))
                .configure(meetings::handlers::configure),
        )
        .await
    };
}

/// Log in through `/api/v1/login` and return the session cookie.
macro_rules! login {
    ($app:expr, $email:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(serde_json::json!({
                "email": $email,
                "password": common::TEST_PASSWORD,
            }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK, "login failed");
        resp.response()
            .cookies()
            .find(|c| c.name() == "id")
            .map(|c| c.into_owned())
            .expect("session cookie")
    }};
}
