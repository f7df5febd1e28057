//! Paragen HTTP Server
//!
//! Actix-web based REST API in front of the paragraph generator

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use paragen_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(Arc::new(AppState::new(config)?));

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .service(routes::index::index)
            .configure(routes::configure_api)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");

    Ok(())
}
