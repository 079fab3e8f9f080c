pub mod prompt;

use crate::cli::Args;
use log::info;
use std::error::Error;

/// Per-process defaults handed to the request layer. Built once at startup
/// and never mutated.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_model: String,
    pub default_temperature: f32,
    pub default_system_prompt: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_model: "deepseek-r1:1.5b".to_string(),
            default_temperature: 0.7,
            default_system_prompt: prompt::DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let default_system_prompt = match &args.system_prompt_path {
            Some(path) if !path.trim().is_empty() => {
                let loaded = prompt::load_system_prompt(path)
                    .map_err(|e| format!("Failed to load system prompt '{}': {}", path, e))?;
                info!("Loaded system prompt override from '{}'", path);
                loaded
            }
            _ => prompt::DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        Ok(Self {
            default_model: args.default_model.clone(),
            default_temperature: clamp_temperature(args.default_temperature),
            default_system_prompt,
        })
    }

    pub fn temperature_or_default(&self, requested: Option<f32>) -> f32 {
        requested.map(clamp_temperature).unwrap_or(self.default_temperature)
    }
}

fn clamp_temperature(value: f32) -> f32 {
    if value.is_nan() {
        return 0.7;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn from_args_applies_overrides() {
        let path = std::env::temp_dir().join(format!("system-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "Be kind and brief.\n").unwrap();
        let args = Args::parse_from([
            "journal-companion",
            "--default-model",
            "llama3",
            "--default-temperature",
            "3.0",
            "--system-prompt-path",
            path.to_str().unwrap(),
        ]);

        let config = ServiceConfig::from_args(&args).unwrap();
        assert_eq!(config.default_model, "llama3");
        assert_eq!(config.default_temperature, 1.0);
        assert_eq!(config.default_system_prompt, "Be kind and brief.");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn from_args_fails_on_missing_prompt_file() {
        let args = Args::parse_from([
            "journal-companion",
            "--system-prompt-path",
            "/no/such/prompt.txt",
        ]);
        assert!(ServiceConfig::from_args(&args).is_err());
    }

    #[test]
    fn requested_temperature_is_clamped() {
        let config = ServiceConfig::default();
        assert_eq!(config.temperature_or_default(Some(1.8)), 1.0);
        assert_eq!(config.temperature_or_default(Some(-0.2)), 0.0);
        assert_eq!(config.temperature_or_default(Some(0.3)), 0.3);
    }

    #[test]
    fn missing_temperature_uses_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.temperature_or_default(None), 0.7);
    }
}
