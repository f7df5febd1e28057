use async_trait::async_trait;
use paragen_common::{GatewayError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateRequest, GenerateResponse, PullRequest, TagsResponse};

/// Timeouts applied to Ollama calls
#[derive(Debug, Clone, Copy)]
pub struct ClientTimeouts {
    /// Whole model listing / health probe
    pub tags: Duration,

    /// Whole generation call
    pub generate: Duration,

    /// Longest silence tolerated while a model download streams progress
    pub pull_idle: Duration,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            tags: Duration::from_secs(5),
            generate: Duration::from_secs(60),
            pull_idle: Duration::from_secs(300),
        }
    }
}

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
    timeouts: ClientTimeouts,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(base_url, ClientTimeouts::default())
    }

    /// Create new Ollama client with custom timeouts
    pub fn with_timeouts(base_url: impl Into<String>, timeouts: ClientTimeouts) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {}", base_url);
        Ok(Self { base_url, client, timeouts })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch and parse the model listing
    async fn fetch_tags(&self) -> Result<TagsResponse> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .timeout(self.timeouts.tags)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(GatewayError::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Send a pull request and drain the progress stream
    ///
    /// The download may take any amount of time as long as progress keeps
    /// arriving; only a silence longer than `pull_idle` fails it.
    async fn try_pull(&self, model_name: &str) -> Result<()> {
        let idle = self.timeouts.pull_idle;
        let request = PullRequest {
            name: model_name.to_string(),
        };

        let send = self.client.post(self.url("/api/pull")).json(&request).send();
        let mut response = tokio::time::timeout(idle, send)
            .await
            .map_err(|_| GatewayError::UpstreamTimeout)??;

        if response.status() != StatusCode::OK {
            return Err(GatewayError::UpstreamStatus(response.status().as_u16()));
        }

        let mut received = 0usize;
        while let Some(chunk) = tokio::time::timeout(idle, response.chunk())
            .await
            .map_err(|_| GatewayError::UpstreamTimeout)??
        {
            received += chunk.len();
        }

        debug!("Pull finished - Model: {}, Progress bytes: {}", model_name, received);

        Ok(())
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn check_status(&self) -> bool {
        match self
            .client
            .get(self.url("/api/tags"))
            .timeout(self.timeouts.tags)
            .send()
            .await
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("Ollama status probe failed: {}", e);
                false
            }
        }
    }

    async fn list_models(&self) -> Vec<String> {
        match self.fetch_tags().await {
            Ok(tags) => tags.model_names(),
            Err(e) => {
                warn!("Failed to list Ollama models: {}", e);
                Vec::new()
            }
        }
    }

    async fn pull_model(&self, model_name: &str) -> bool {
        info!("Pulling model: {}", model_name);

        match self.try_pull(model_name).await {
            Ok(()) => {
                info!("Model pulled: {}", model_name);
                true
            }
            Err(e) => {
                warn!("Failed to pull model {}: {}", model_name, e);
                false
            }
        }
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&request)
            .timeout(self.timeouts.generate)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(GatewayError::UpstreamStatus(response.status().as_u16()));
        }

        let result: GenerateResponse = response.json().await?;

        debug!(
            "Received response from Ollama - Length: {}, Done: {}",
            result.response.len(),
            result.done
        );

        Ok(result.response)
    }
}
