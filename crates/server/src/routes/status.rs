use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;

/// GET /api/status - Model service reachability and installed models
#[get("/status")]
pub async fn status(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    let status = state.gateway.model_status(&state.config.default_model).await;
    Ok(HttpResponse::Ok().json(status))
}
