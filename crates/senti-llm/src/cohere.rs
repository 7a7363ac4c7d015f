//! Cohere HTTP client for sentiment completions.
//!
//! Uses the Cohere chat API at /v1/chat. The completion text is returned
//! untouched; callers decide what to do with it.

use async_trait::async_trait;
use senti_core::{ClassifyError, SentiError, SentiResult, SentimentClient};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Cohere API URL.
pub const DEFAULT_COHERE_URL: &str = "https://api.cohere.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "COHERE_API_KEY";

/// Cohere chat client.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct CohereClient {
    base_url: String,
    api_key: String,
    model: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl CohereClient {
    /// Create a client for `base_url`. A blank key or URL is rejected.
    ///
    /// No request timeout is set; bounding the wait is the dispatcher's job.
    pub fn new(api_key: &str, base_url: &str, model: Option<&str>) -> SentiResult<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(SentiError::missing_credential(API_KEY_ENV));
        }
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(SentiError::config("Cohere base URL is empty"));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SentiError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.map(str::to_string),
            client,
        })
    }

    /// Create a client against the public Cohere API.
    pub fn from_api_key(api_key: Option<String>) -> SentiResult<Self> {
        let api_key = api_key.ok_or_else(|| SentiError::missing_credential(API_KEY_ENV))?;
        Self::new(&api_key, DEFAULT_COHERE_URL, None)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

#[async_trait]
impl SentimentClient for CohereClient {
    async fn classify(&self, prompt: &str) -> Result<String, ClassifyError> {
        let request = ChatRequest {
            message: prompt,
            model: self.model.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/v1/chat", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(ClassifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;

        debug!(len = result.text.len(), "Received completion");

        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_missing_credential() {
        for key in ["", "   "] {
            match CohereClient::new(key, DEFAULT_COHERE_URL, None) {
                Err(SentiError::MissingCredential(name)) => assert_eq!(name, API_KEY_ENV),
                _ => panic!("expected missing credential for {key:?}"),
            }
        }
        assert!(matches!(
            CohereClient::from_api_key(None),
            Err(SentiError::MissingCredential(_))
        ));
    }

    #[test]
    fn test_blank_base_url_is_config_error() {
        for url in ["", "  "] {
            match CohereClient::new("k", url, None) {
                Err(SentiError::Config(msg)) => assert!(msg.contains("base URL")),
                _ => panic!("expected config error for {url:?}"),
            }
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CohereClient::new("k", "http://localhost:9000/", Some("command-r")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.model(), Some("command-r"));
    }

    #[test]
    fn test_request_omits_unset_model() {
        let json = serde_json::to_string(&ChatRequest {
            message: "hi",
            model: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"hi"}"#);
    }
}
