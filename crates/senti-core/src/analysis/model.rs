//! Analysis request and result models.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Fixed score reported on every successful classification.
///
/// It is a placeholder and carries no signal; nothing computes it.
pub const PLACEHOLDER_SCORE: f64 = 0.5;

/// Prefix prepended to every error message in a failed result.
pub const FAILURE_PREFIX: &str = "classification failed: ";

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Outcome of one classification attempt.
///
/// Serialized untagged, so the wire shape is either
/// `{"sentiment": "...", "score": 0.5}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Classified { sentiment: String, score: f64 },
    Failed { error: String },
}

impl AnalysisResult {
    /// Wrap a completion as-is, with the placeholder score.
    pub fn classified(sentiment: impl Into<String>) -> Self {
        Self::Classified {
            sentiment: sentiment.into(),
            score: PLACEHOLDER_SCORE,
        }
    }

    pub fn failed(err: &ClassifyError) -> Self {
        Self::Failed {
            error: format!("{FAILURE_PREFIX}{err}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
