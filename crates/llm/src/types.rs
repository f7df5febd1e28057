use serde::{Deserialize, Serialize};

use crate::prompts::{Length, Style};

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "llama2", "mistral")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerateOptions {
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,

    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Penalty applied to repeated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f32>,
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    #[serde(default)]
    pub response: String,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,
}

/// Ollama pull request
#[derive(Debug, Clone, Serialize)]
pub struct PullRequest {
    /// Model to download
    pub name: String,
}

/// Ollama `/api/tags` response
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

/// Single entry of the model listing
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDescriptor {
    /// Name with tag, e.g. "llama2:latest"
    pub name: String,
}

impl TagsResponse {
    /// Model names with the tag suffix stripped, in listing order
    pub fn model_names(&self) -> Vec<String> {
        self.models
            .iter()
            .map(|m| strip_model_tag(&m.name).to_string())
            .collect()
    }
}

/// Portion of a model name before the first colon
pub fn strip_model_tag(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}

/// A paragraph generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Subject of the paragraph, already trimmed
    pub topic: String,
    pub style: Style,
    pub length: Length,
    /// Model to generate with
    pub model: String,
}

impl GenerationRequest {
    /// Create a request with default style and length
    pub fn new(topic: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            style: Style::default(),
            length: Length::default(),
            model: model.into(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }
}

/// Outcome of a paragraph generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    pub success: bool,

    /// Generated paragraph, empty on failure
    pub text: String,

    /// Human-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Model that produced the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Local time of generation, "YYYY-MM-DD HH:MM:SS"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl GenerationResult {
    /// Successful generation stamped with the current local time
    pub fn success(text: String, model: String) -> Self {
        Self {
            success: true,
            text,
            error: None,
            model: Some(model),
            timestamp: Some(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    /// Failed generation
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(error.into()),
            model: None,
            timestamp: None,
        }
    }
}

/// Model service status as reported to the front-end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelStatus {
    pub ollama_running: bool,
    pub available_models: Vec<String>,
    pub current_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names_strip_tags() {
        let tags: TagsResponse =
            serde_json::from_str(r#"{"models":[{"name":"llama2:latest"}]}"#).unwrap();
        assert_eq!(tags.model_names(), vec!["llama2"]);
    }

    #[test]
    fn test_model_names_keep_order_and_extra_fields() {
        let body = r#"{"models":[
            {"name":"mistral:7b","size":4109865159},
            {"name":"phi"},
            {"name":"llama2:13b:q4"}
        ]}"#;
        let tags: TagsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(tags.model_names(), vec!["mistral", "phi", "llama2"]);
    }

    #[test]
    fn test_missing_models_field() {
        let tags: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(tags.model_names().is_empty());
    }

    #[test]
    fn test_generate_request_body() {
        let request = GenerateRequest {
            model: "llama2".to_string(),
            prompt: "hello".to_string(),
            stream: Some(false),
            options: Some(GenerateOptions {
                num_predict: Some(200),
                top_k: Some(40),
                ..Default::default()
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["stream"], false);
        assert_eq!(value["options"]["num_predict"], 200);
        assert_eq!(value["options"]["top_k"], 40);
        assert!(value["options"].get("temperature").is_none());
    }

    #[test]
    fn test_generate_response_without_text() {
        let response: GenerateResponse = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(response.response, "");
    }

    #[test]
    fn test_failure_result_shape() {
        let value = serde_json::to_value(GenerationResult::failure("boom")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "text": "", "error": "boom"})
        );
    }

    #[test]
    fn test_success_result_timestamp_format() {
        let result = GenerationResult::success("text".to_string(), "llama2".to_string());
        let timestamp = result.timestamp.unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
        assert_eq!(result.model.as_deref(), Some("llama2"));
        assert!(result.error.is_none());
    }
}
