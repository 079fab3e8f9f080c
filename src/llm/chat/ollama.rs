use reqwest::{ Client as HttpClient, StatusCode };
use serde::{ Deserialize, Serialize };
use async_trait::async_trait;
use log::debug;
use super::{ ChatClient, ChatCompletion, ChatMessage, ModelEntry };
use crate::llm::{ LlmConfig, LlmError };

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: ChatOptions,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    modified_at: Option<String>,
}

impl From<TagModel> for ModelEntry {
    fn from(tag: TagModel) -> Self {
        ModelEntry {
            id: tag.model.unwrap_or_else(|| tag.name.clone()),
            name: tag.name,
            size: tag.size,
            modified_at: tag.modified_at,
        }
    }
}

impl OllamaClient {
    pub fn new(base_url: Option<String>) -> Self {
        let url = base_url.unwrap_or_else(|| "http://localhost:11434".into());

        Self {
            http: HttpClient::new(),
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(Some(config.base_url.clone()))
    }

    async fn error_for_status(
        resp: reqwest::Response,
        model: Option<&str>
    ) -> Result<reqwest::Response, LlmError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            if let Some(model) = model {
                return Err(LlmError::ModelNotFound(model.to_string()));
            }
        }
        Err(LlmError::Status { status: status.as_u16(), body })
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn chat(&self, request: &ChatCompletion) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.base_url);
        let payload = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            stream: false,
            options: ChatOptions { temperature: request.temperature },
        };
        debug!("POST {} model={} temperature={}", url, request.model, request.temperature);

        let resp = self.http.post(&url).json(&payload).send().await?;
        let resp = Self::error_for_status(resp, Some(&request.model)).await?;
        let bytes = resp.bytes().await?;
        let data: ChatResponse = serde_json::from_slice(&bytes)?;
        Ok(data.message.content)
    }

    async fn list_models(&self) -> Result<Vec<ModelEntry>, LlmError> {
        let url = format!("{}/api/tags", self.base_url);
        let resp = self.http.get(&url).send().await?;
        let resp = Self::error_for_status(resp, None).await?;
        let bytes = resp.bytes().await?;
        let data: TagsResponse = serde_json::from_slice(&bytes)?;
        Ok(data.models.into_iter().map(ModelEntry::from).collect())
    }

    fn get_base_url(&self) -> Option<String> {
        Some(self.base_url.clone())
    }
}
