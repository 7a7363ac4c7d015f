//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use senti_llm::cohere::{CohereClient, DEFAULT_COHERE_URL};

pub mod classify;
pub mod serve;

/// Senti - sentiment classification gateway backed by a chat-completion model
#[derive(Parser)]
#[command(name = "senti")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve(serve::ServeArgs),

    /// Classify a single text and print the JSON result
    Classify(classify::ClassifyArgs),
}

/// Connection settings for the Cohere chat API.
#[derive(Args)]
pub struct CohereArgs {
    /// Cohere API key
    #[arg(long, env = "COHERE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Cohere API base URL
    #[arg(long, env = "COHERE_BASE_URL", default_value = DEFAULT_COHERE_URL)]
    pub cohere_url: String,

    /// Chat model (provider default when omitted)
    #[arg(long, env = "COHERE_MODEL")]
    pub model: Option<String>,
}

impl CohereArgs {
    /// Build the shared client. A missing or blank key is fatal.
    pub fn build_client(&self) -> Result<CohereClient> {
        let api_key = self.api_key.as_deref().unwrap_or_default();
        let client = CohereClient::new(api_key, &self.cohere_url, self.model.as_deref())?;
        Ok(client)
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Classify(args) => classify::execute(args).await,
        }
    }
}
