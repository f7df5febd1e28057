use paragen_common::{GatewayError, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::llm_trait::LlmClient;
use crate::postprocess::clean_generated_text;
use crate::prompts::build_prompt;
use crate::types::{GenerateOptions, GenerateRequest, GenerationRequest, GenerationResult, ModelStatus};

/// Sampling parameters sent with every generation
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;
const TOP_K: u32 = 40;
const REPEAT_PENALTY: f32 = 1.1;

/// Generates paragraphs through a model service
///
/// Holds no per-request state: the model name travels with each request.
#[derive(Clone)]
pub struct GenerationGateway {
    client: Arc<dyn LlmClient>,
}

impl GenerationGateway {
    /// Create new gateway over a model service client
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn check_status(&self) -> bool {
        self.client.check_status().await
    }

    pub async fn list_models(&self) -> Vec<String> {
        self.client.list_models().await
    }

    pub async fn pull_model(&self, model_name: &str) -> bool {
        self.client.pull_model(model_name).await
    }

    /// Service status, listing models only when the service is up
    pub async fn model_status(&self, current_model: &str) -> ModelStatus {
        let ollama_running = self.check_status().await;
        let available_models = if ollama_running {
            self.list_models().await
        } else {
            Vec::new()
        };

        ModelStatus {
            ollama_running,
            available_models,
            current_model: current_model.to_string(),
        }
    }

    /// Generate a paragraph, converting every failure into a failed result
    pub async fn generate_paragraph(&self, request: &GenerationRequest) -> GenerationResult {
        info!(
            "Generating paragraph - Model: {}, Style: {}, Length: {}",
            request.model,
            request.style.as_str(),
            request.length.as_str()
        );

        match self.try_generate(request).await {
            Ok(text) => {
                info!("Paragraph generated - Length: {} chars", text.chars().count());
                GenerationResult::success(text, request.model.clone())
            }
            Err(e) => {
                if e.is_upstream() {
                    warn!("Paragraph generation failed: {}", e);
                } else {
                    error!("Paragraph generation failed: {}", e);
                }
                GenerationResult::failure(e.to_string())
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<String> {
        if !self.check_status().await {
            return Err(GatewayError::UpstreamUnavailable);
        }

        let upstream_request = GenerateRequest {
            model: request.model.clone(),
            prompt: build_prompt(&request.topic, request.style, request.length),
            stream: Some(false),
            options: Some(GenerateOptions {
                num_predict: Some(request.length.max_tokens()),
                temperature: Some(TEMPERATURE),
                top_p: Some(TOP_P),
                top_k: Some(TOP_K),
                repeat_penalty: Some(REPEAT_PENALTY),
            }),
        };

        let raw = self.client.generate(upstream_request).await?;

        Ok(clean_generated_text(&request.topic, raw.trim()))
    }
}
