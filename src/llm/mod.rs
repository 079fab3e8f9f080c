pub mod chat;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("model runtime unreachable: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model '{0}' not found")]
    ModelNotFound(String),
    #[error("model runtime returned {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },
    #[error("unexpected model runtime payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
}

