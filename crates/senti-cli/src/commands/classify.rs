//! One-off classification from the command line.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use senti_core::Dispatcher;

use super::CohereArgs;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Text to classify
    pub text: String,

    /// Give up after this many seconds (no limit by default)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(flatten)]
    pub cohere: CohereArgs,
}

/// Prints the same JSON body `POST /analyze` would return.
pub async fn execute(args: ClassifyArgs) -> Result<()> {
    let client = Arc::new(args.cohere.build_client()?);
    let dispatcher =
        Dispatcher::new(client).with_timeout(args.timeout_secs.map(Duration::from_secs));

    let result = dispatcher.dispatch(args.text).await;
    if result.is_failure() {
        tracing::warn!("Classification did not produce a label");
    }

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
