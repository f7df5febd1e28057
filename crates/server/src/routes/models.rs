use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::{FailureResponse, PullModelBody, PullModelResponse};

/// POST /api/pull-model - Download a model into the model service
#[post("/pull-model")]
pub async fn pull_model(
    body: web::Json<PullModelBody>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let model_name = match body.into_inner().model_name {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(HttpResponse::Ok().json(FailureResponse::new("Model name required"))),
    };

    info!("Pull requested - Model: {}", model_name);

    let success = state.gateway.pull_model(&model_name).await;

    Ok(HttpResponse::Ok().json(PullModelResponse { success }))
}
