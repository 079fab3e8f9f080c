pub mod cli;
pub mod companion;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use companion::CompanionService;
use config::ServiceConfig;
use llm::LlmConfig;
use llm::chat::new_client as new_chat_client;
use log::{ info, warn };
use server::Server;
use std::error::Error;
use std::path::Path;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Ollama Host: {}", args.ollama_host);
    info!("Ollama Path: {}", args.ollama_path);
    info!("Default Model: {}", args.default_model);
    info!("Default Temperature: {}", args.default_temperature);
    info!("System Prompt Override: {}", args.system_prompt_path.as_deref().unwrap_or("none"));
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    if !Path::new(&args.ollama_path).exists() {
        warn!("Ollama executable not found at '{}'. Set OLLAMA_PATH if it is installed elsewhere.", args.ollama_path);
    }

    let service_config = ServiceConfig::from_args(&args)?;
    let llm_config = LlmConfig {
        base_url: args.ollama_host.clone(),
    };
    let chat_client = new_chat_client(&llm_config);

    let runtime_url = chat_client.get_base_url().unwrap_or_else(|| llm_config.base_url.clone());
    match chat_client.list_models().await {
        Ok(models) => info!(
            "Ollama at {} is running with models: {:?}",
            runtime_url,
            models.iter().map(|m| m.name.as_str()).collect::<Vec<_>>()
        ),
        Err(e) => {
            warn!("Could not connect to Ollama at {}: {}", runtime_url, e);
            warn!("Make sure Ollama is running before making API calls");
        }
    }

    let service = CompanionService::new(chat_client, service_config);
    let server = Server::new(service, args);
    server.run().await?;

    Ok(())
}
