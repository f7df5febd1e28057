/// Paragen error types
///
/// The upstream and validation variants render exactly the message that is
/// returned to inbound callers in the `error` field.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Health probe against the model service failed
    #[error("Ollama service is not running. Please start Ollama first.")]
    UpstreamUnavailable,

    /// Model service answered with a non-200 status
    #[error("Ollama API error: {0}")]
    UpstreamStatus(u16),

    /// Model service call exceeded its timeout
    #[error("Request timed out. The model might be taking too long to respond.")]
    UpstreamTimeout,

    /// Network-level failure talking to the model service
    #[error("Connection error: {0}")]
    UpstreamConnection(String),

    /// Missing or empty required input
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    /// Create connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Self::UpstreamConnection(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error came from talking to the model service
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable
                | Self::UpstreamStatus(_)
                | Self::UpstreamTimeout
                | Self::UpstreamConnection(_)
        )
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else {
            Self::UpstreamConnection(err.to_string())
        }
    }
}
