//! The seam to the upstream chat-completion service.

use async_trait::async_trait;

use crate::error::ClassifyError;

/// A remote completion service that turns a prompt into free text.
///
/// Implementations are shared across all concurrent requests behind an
/// `Arc` and must not need per-request locking.
#[async_trait]
pub trait SentimentClient: Send + Sync {
    /// Send `prompt` and return the completion text verbatim.
    async fn classify(&self, prompt: &str) -> Result<String, ClassifyError>;
}
