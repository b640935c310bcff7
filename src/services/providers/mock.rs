//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
///
/// When enabled it answers with the upstream-shaped body from
/// [`mock_reply`]; when disabled it fails the way an unreachable upstream
/// would.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// The body the mock returns for a given prompt.
pub fn mock_reply(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": format!("Mock response for: {prompt}") }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(mock_reply(prompt))
    }
}
