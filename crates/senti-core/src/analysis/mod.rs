//! Sentiment classification: prompt construction and per-request dispatch.

pub mod model;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::client::SentimentClient;
use crate::error::ClassifyError;
use model::AnalysisResult;

/// Labels the prompt asks the model to choose from.
///
/// Nothing enforces them on the way back; completions pass through verbatim.
pub const SENTIMENT_LABELS: [&str; 3] = ["EMOCIONADO", "NEGATIVO", "NEUTRAL"];

/// Build the instruction prompt that embeds the caller's raw text.
pub fn build_prompt(text: &str) -> String {
    format!(
        "Analiza el sentimiento y responde solamente con una palabra: {}, {} o {} del siguiente texto: {}",
        SENTIMENT_LABELS[0], SENTIMENT_LABELS[1], SENTIMENT_LABELS[2], text
    )
}

/// Run a single classification attempt. No retry, no timeout.
pub async fn classify_text(client: &dyn SentimentClient, text: &str) -> AnalysisResult {
    let prompt = build_prompt(text);
    match client.classify(&prompt).await {
        Ok(completion) => {
            debug!(completion = %completion, "Classification succeeded");
            AnalysisResult::classified(completion)
        }
        Err(e) => {
            warn!(error = %e, "Classification failed");
            AnalysisResult::failed(&e)
        }
    }
}

/// Runs each classification in its own task and hands the outcome back
/// over a oneshot channel.
///
/// Without a timeout the wait is unbounded: a hung upstream call hangs the
/// request. With one, the task is aborted when the limit expires.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn SentimentClient>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn SentimentClient>) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Bound the wait for a result. `None` keeps the unbounded default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Classify `text`, waiting for exactly one result.
    pub async fn dispatch(&self, text: String) -> AnalysisResult {
        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);

        let task = tokio::spawn(async move {
            let result = classify_text(client.as_ref(), &text).await;
            // Receiver is gone only if the gateway stopped waiting.
            let _ = tx.send(result);
        });

        let received = match self.timeout {
            None => rx.await,
            Some(limit) => match tokio::time::timeout(limit, rx).await {
                Ok(received) => received,
                Err(_) => {
                    task.abort();
                    warn!(?limit, "Classification timed out, task aborted");
                    return AnalysisResult::failed(&ClassifyError::TimedOut(limit));
                }
            },
        };

        received.unwrap_or_else(|_| {
            warn!("Classification task dropped its result channel");
            AnalysisResult::failed(&ClassifyError::Abandoned)
        })
    }
}
