use paragen_common::{AppConfig, Result};
use paragen_llm::{GenerationGateway, LlmClient, OllamaClient};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Paragraph generation over the model service
    pub gateway: GenerationGateway,
}

impl AppState {
    /// Create new application state talking to the configured Ollama instance
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = OllamaClient::new(config.ollama_base_url.clone())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create application state over an arbitrary model service client
    pub fn with_client(config: AppConfig, client: Arc<dyn LlmClient>) -> Self {
        Self {
            config,
            gateway: GenerationGateway::new(client),
        }
    }
}
