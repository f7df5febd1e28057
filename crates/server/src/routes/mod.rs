pub mod generate;
pub mod index;
pub mod models;
pub mod status;

use actix_web::web;

/// Register the JSON API under `/api`
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(status::status)
            .service(generate::generate)
            .service(models::pull_model),
    );
}
