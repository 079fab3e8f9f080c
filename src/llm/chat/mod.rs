pub mod ollama;

use async_trait::async_trait;
use serde::{ Deserialize, Serialize };
use std::sync::Arc;
use super::{ LlmConfig, LlmError };
use self::ollama::OllamaClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

/// A single non-streaming completion call: one model, a system/user message
/// pair and a temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatCompletion {
    pub fn new(model: &str, system: &str, user: &str, temperature: f32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature,
        }
    }
}

/// One entry of the model listing returned to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub modified_at: Option<String>,
}

impl ModelEntry {
    pub fn named(id: &str, name: &str) -> Self {
        Self { id: id.to_string(), name: name.to_string(), size: None, modified_at: None }
    }
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn chat(&self, request: &ChatCompletion) -> Result<String, LlmError>;

    async fn list_models(&self) -> Result<Vec<ModelEntry>, LlmError>;

    fn get_base_url(&self) -> Option<String> {
        None
    }
}

pub fn new_client(config: &LlmConfig) -> Arc<dyn ChatClient> {
    Arc::new(OllamaClient::from_config(config))
}
