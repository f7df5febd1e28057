use actix_web::{post, web, HttpResponse};
use paragen_common::GatewayError;
use paragen_llm::{GenerationRequest, Length, Style};
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::{FailureResponse, GenerateBody};

/// POST /api/generate - Generate a paragraph about a topic
#[post("/generate")]
pub async fn generate(
    body: web::Json<GenerateBody>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let body = body.into_inner();

    let topic = body.topic.as_deref().unwrap_or("").trim();
    if topic.is_empty() {
        let err = GatewayError::invalid_input("Please provide a topic");
        return Ok(HttpResponse::Ok().json(FailureResponse::new(err.to_string())));
    }

    let request = GenerationRequest {
        topic: topic.to_string(),
        style: Style::resolve(body.style.as_deref().unwrap_or("informative")),
        length: Length::resolve(body.length.as_deref().unwrap_or("medium")),
        model: body
            .model
            .unwrap_or_else(|| state.config.default_model.clone()),
    };

    info!("Generate requested - Topic: {}, Model: {}", request.topic, request.model);

    let result = state.gateway.generate_paragraph(&request).await;

    Ok(HttpResponse::Ok().json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_state, FakeClient};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_empty_topic_is_rejected() {
        let fake = FakeClient::running("unused");
        let app = test::init_service(
            App::new()
                .app_data(app_state(&fake))
                .service(web::scope("/api").service(generate)),
        )
        .await;

        for body in [
            json!({"topic": "", "style": "informative", "length": "medium"}),
            json!({"topic": "   "}),
            json!({}),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/generate")
                .set_json(body)
                .to_request();
            let resp: Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(resp, json!({"success": false, "error": "Please provide a topic"}));
        }

        assert_eq!(fake.generate_calls(), 0);
    }

    #[actix_web::test]
    async fn test_generate_uses_defaults() {
        let fake = FakeClient::running("Sunlight warms the planet through radiation.");
        let app = test::init_service(
            App::new()
                .app_data(app_state(&fake))
                .service(web::scope("/api").service(generate)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({"topic": "  the sun  "}))
            .to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["success"], true);
        assert_eq!(resp["text"], "Sunlight warms the planet through radiation.");
        assert_eq!(resp["model"], "llama2");
        assert!(resp["timestamp"].is_string());

        let sent = fake.last_request();
        assert!(sent.prompt.contains("Topic: the sun\n\nParagraph:"));
        assert!(sent.prompt.starts_with("Write an informative and educational paragraph about"));
        assert_eq!(sent.options.and_then(|o| o.num_predict), Some(200));
    }

    #[actix_web::test]
    async fn test_generate_with_explicit_model() {
        let fake = FakeClient::running("Waves move energy.");
        let app = test::init_service(
            App::new()
                .app_data(app_state(&fake))
                .service(web::scope("/api").service(generate)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({"topic": "waves", "style": "simple", "length": "short", "model": "mistral"}))
            .to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["success"], true);
        assert_eq!(resp["model"], "mistral");
        assert_eq!(fake.last_request().model, "mistral");
        assert_eq!(fake.last_request().options.and_then(|o| o.num_predict), Some(100));
    }

    #[actix_web::test]
    async fn test_service_down_is_reported_in_body() {
        let fake = FakeClient::stopped();
        let app = test::init_service(
            App::new()
                .app_data(app_state(&fake))
                .service(web::scope("/api").service(generate)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({"topic": "cats"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "text": "",
                "error": "Ollama service is not running. Please start Ollama first."
            })
        );
        assert_eq!(fake.generate_calls(), 0);
    }
}
