//! Gemini AI provider implementation.
//!
//! Implements single-turn text generation using Google's Gemini API.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, self.config.model, method, self.config.api_key
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError {
                status,
                message: upstream_error_message(&error_text),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

/// Pull the structured `error.message` out of a Gemini error body, falling
/// back to the raw body text.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}
