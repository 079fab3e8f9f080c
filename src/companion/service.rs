use std::sync::Arc;
use log::{ debug, error, info, warn };
use crate::config::ServiceConfig;
use crate::llm::LlmError;
use crate::llm::chat::{ ChatClient, ChatCompletion, ModelEntry };
use crate::models::chat::{ AnalyzeRequest, ChatRequest, ChatResult, RespondRequest };
use super::classify::{ Branch, JournalEntry };
use super::fallback;
use super::hints::ChatHint;
use super::prompts::{ build_analysis_prompt, build_prompt, PromptPair };
use super::sanitize::strip_think_tags;
use super::verify::ensure_lead_in;

pub const FALLBACK_MODEL: &str = "fallback";

/// Shown by /api/models when the runtime cannot be listed.
pub fn placeholder_models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::named("gpt-3.5-turbo", "GPT-3.5 Turbo"),
        ModelEntry::named("gpt-4", "GPT-4")
    ]
}

pub(crate) fn preview(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    if text.chars().count() > limit {
        out.push_str("...");
    }
    out
}

#[derive(Clone)]
pub struct CompanionService {
    client: Arc<dyn ChatClient>,
    config: Arc<ServiceConfig>,
}

impl CompanionService {
    pub fn new(client: Arc<dyn ChatClient>, config: ServiceConfig) -> Self {
        Self { client, config: Arc::new(config) }
    }

    /// One model round trip. Reasoning markup is stripped before the text
    /// leaves this function.
    async fn complete(&self, model: &str, prompt: &PromptPair, temperature: f32) -> Result<String, LlmError> {
        let request = ChatCompletion::new(model, &prompt.system, &prompt.user, temperature);
        debug!("Sending request to {} with user message: {}", model, preview(&prompt.user, 100));
        let raw = self.client.chat(&request).await?;
        debug!("Raw model response: {}", preview(&raw, 100));
        Ok(strip_think_tags(&raw))
    }

    pub async fn respond(&self, req: &RespondRequest) -> String {
        let branch = Branch::classify(req);
        let entry = JournalEntry::from(req);
        info!(
            "Respond branch={} emotion={} intensity={} content={}",
            branch.label(),
            entry.emotion,
            entry.intensity,
            preview(&entry.content, 50)
        );

        let prompt = match build_prompt(&branch, &entry) {
            Some(prompt) => prompt,
            None => {
                info!("No advisor or recipient specified, using default acknowledgment");
                return fallback::acknowledgment(&entry.emotion);
            }
        };

        let model = &self.config.default_model;
        match self.complete(model, &prompt, self.config.default_temperature).await {
            Ok(text) => ensure_lead_in(&branch, &text),
            Err(e) => {
                error!("Model call failed for {} branch: {}", branch.label(), e);
                warn!("Using static fallback for {} branch", branch.label());
                fallback::respond_fallback(&branch, &entry)
            }
        }
    }

    pub async fn analyze(&self, req: &AnalyzeRequest) -> String {
        let entry = JournalEntry::new(&req.content, &req.emotion, req.intensity);
        info!("Analyze emotion={} intensity={}", entry.emotion, entry.intensity);

        let prompt = build_analysis_prompt(&entry);
        let model = &self.config.default_model;
        match self.complete(model, &prompt, self.config.default_temperature).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error getting analysis from model: {}", e);
                fallback::analysis_fallback(&entry)
            }
        }
    }

    pub async fn chat(&self, req: &ChatRequest) -> ChatResult {
        let model = req.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.config.default_model.as_str())
            .to_string();
        let system = req.system_prompt
            .clone()
            .unwrap_or_else(|| self.config.default_system_prompt.clone());
        let temperature = self.config.temperature_or_default(req.temperature);
        let hint = ChatHint::detect(&req.message);
        info!("Chat model={} temperature={} hint={:?}", model, temperature, hint);

        let prompt = PromptPair { system, user: req.message.clone() };
        match self.complete(&model, &prompt, temperature).await {
            Ok(text) => {
                let response = match &hint {
                    Some(hint) => ensure_lead_in(&hint.branch(), &text),
                    None => text,
                };
                ChatResult { response, model }
            }
            Err(e) => {
                error!("Error calling model runtime: {}", e);
                ChatResult {
                    response: fallback::chat_fallback(hint.as_ref()).to_string(),
                    model: FALLBACK_MODEL.to_string(),
                }
            }
        }
    }

    pub async fn models(&self) -> Vec<ModelEntry> {
        match self.client.list_models().await {
            Ok(models) if !models.is_empty() => {
                info!("Available models: {:?}", models.iter().map(|m| m.name.as_str()).collect::<Vec<_>>());
                models
            }
            Ok(_) => {
                warn!("Model runtime reported no models, returning placeholders");
                placeholder_models()
            }
            Err(e) => {
                warn!("Error listing models: {}", e);
                placeholder_models()
            }
        }
    }
}
