use paragen_common::Result;
use crate::types::GenerateRequest;
use async_trait::async_trait;

/// Common trait for model service clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Whether the model service answers its model listing with 200
    async fn check_status(&self) -> bool;

    /// Installed model names without tag suffix; empty on any failure
    async fn list_models(&self) -> Vec<String>;

    /// Download a model, true only when the service reports success
    async fn pull_model(&self, model_name: &str) -> bool;

    /// Generate text from a prompt, returning the raw response text
    async fn generate(&self, request: GenerateRequest) -> Result<String>;
}
