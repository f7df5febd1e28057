use serde::{Deserialize, Serialize};

/// Generate request body
///
/// Every field is optional; defaults are applied by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    /// Paragraph subject
    pub topic: Option<String>,

    /// informative, creative, technical or simple
    pub style: Option<String>,

    /// short, medium or long
    pub length: Option<String>,

    /// Model name, configured default when absent
    pub model: Option<String>,
}

/// Pull model request body
#[derive(Debug, Default, Deserialize)]
pub struct PullModelBody {
    pub model_name: Option<String>,
}

/// Pull model response
#[derive(Debug, Serialize)]
pub struct PullModelResponse {
    pub success: bool,
}

/// Rejected request
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
