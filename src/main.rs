use actix_web::{App, HttpServer, middleware, web};

use meetings::auth::{rate_limit::RateLimiter, session};
use meetings::config::Config;
use meetings::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    if config.database_url.contains("data/") {
        std::fs::create_dir_all("data").expect("Failed to create data directory");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to create DB pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    db::seed_superuser(&pool, &config.first_superuser, &config.first_superuser_password)
        .await
        .expect("Failed to seed superuser");

    let secret_key = session::key_from_config(config.session_key.as_deref());
    let limiter = RateLimiter::new();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(handlers::configure)
            .default_service(web::to(handlers::api_v1::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
