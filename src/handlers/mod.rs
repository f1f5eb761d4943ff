pub mod api_v1;

use actix_web::web;

/// Mount every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(api_v1::configure)
            .default_service(web::to(api_v1::not_found)),
    );
}
