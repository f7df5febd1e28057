//! Paragen LLM Integration
//!
//! Ollama API client, prompt construction and paragraph generation

mod client;
mod gateway;
mod llm_trait;
mod postprocess;
mod prompts;
mod types;

pub use client::{ClientTimeouts, OllamaClient};
pub use gateway::GenerationGateway;
pub use llm_trait::LlmClient;
pub use postprocess::clean_generated_text;
pub use prompts::{build_prompt, Length, Style};
pub use types::{
    GenerateOptions, GenerateRequest, GenerateResponse, GenerationRequest,
    GenerationResult, ModelDescriptor, ModelStatus, PullRequest, TagsResponse,
};
