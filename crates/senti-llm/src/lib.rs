//! # Senti LLM
//!
//! Remote chat-completion clients implementing [`senti_core::SentimentClient`].

pub mod cohere;

pub use cohere::CohereClient;
