//! AI provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction over the upstream
//! generative-language API, allowing easy swapping between backends
//! (Gemini, mock).

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for single-turn text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send one prompt upstream and return the raw response body.
    ///
    /// The body stays opaque here; the relay hands it to the caller
    /// unmodified.
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, ProviderError>;
}
