//! actbot CLI: run the REST webhook server or the Telegram bot with the demo action
//! set, or list the registered actions. Config from env (.env supported) and CLI args.

use std::sync::Arc;

use actbot_core::init_tracing;
use actbot_server::ServerConfig;
use actbot_telegram::TelegramConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use llm_adapter::LlmAdapter;
use llm_client::EnvLlmConfig;
use tracing::info;
use weather_bot::{action_formatters, SimplePatternMatcher, WeatherBotActions};

#[derive(Parser)]
#[command(name = "actbot")]
#[command(about = "Conversational action framework: serve, telegram, actions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST webhook server (config from env; host/port can override HOST/PORT).
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Telegram {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the registered action catalog.
    Actions,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            init_logging(None)?;
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            let adapter = build_adapter()?;
            info!(actions = adapter.actions().len(), "starting REST server");
            actbot_server::serve(&config, adapter).await
        }
        Commands::Telegram { token } => {
            let config = TelegramConfig::from_env_with(token)?;
            init_logging(config.log_file.as_deref())?;
            let adapter = build_adapter()?;
            let bot = config.build_bot()?;
            info!(actions = adapter.actions().len(), "starting Telegram bot");
            actbot_telegram::run_bot(bot, adapter).await
        }
        Commands::Actions => {
            // Catalog listing needs no LLM client, only the registry.
            let mut registry = actbot_core::ActionRegistry::new();
            registry.discover(&WeatherBotActions)?;
            for info in registry.all() {
                println!("{} - {}", info.name, info.description);
                for param in &info.parameters {
                    let requirement = if param.required { "required" } else { "optional" };
                    println!("    {} ({}, {})", param.name, param.param_type, requirement);
                }
            }
            Ok(())
        }
    }
}

/// Builds the dispatch pipeline with the demo action set: weather-bot actions,
/// their formatters, and the keyword pattern matcher in front of the LLM.
fn build_adapter() -> Result<Arc<LlmAdapter>> {
    let llm_config = EnvLlmConfig::from_env()?;
    let mut adapter = LlmAdapter::new(Arc::new(llm_config.build_client()));
    adapter.discover(&WeatherBotActions)?;
    adapter.register_pattern_processor(Arc::new(SimplePatternMatcher));
    adapter.register_formatters(action_formatters());
    Ok(Arc::new(adapter))
}

fn init_logging(log_file: Option<&str>) -> Result<()> {
    let log_file = match log_file {
        Some(path) => path.to_string(),
        None => std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/actbot.log".to_string()),
    };
    if let Some(parent) = std::path::Path::new(&log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(&log_file)
}
