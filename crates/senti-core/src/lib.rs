//! Senti Core Library
//!
//! Request/response model, the sentiment client seam and the dispatcher
//! that runs one classification per request.

pub mod analysis;
pub mod client;
pub mod error;

pub use analysis::model::{AnalysisRequest, AnalysisResult, PLACEHOLDER_SCORE};
pub use analysis::Dispatcher;
pub use client::SentimentClient;
pub use error::{ClassifyError, SentiError, SentiResult};
