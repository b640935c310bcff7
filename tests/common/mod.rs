//! Shared helpers for router-level tests.

use oasis_qa_service::config::{
    AppConfig, GoogleConfig, ModelConfig, ServerConfig, StaticFilesConfig,
};
use oasis_qa_service::services::providers::mock::MockTextProvider;
use oasis_qa_service::startup::AppState;
use std::sync::Arc;

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig { port: 0 },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
        },
        static_files: StaticFilesConfig {
            dir: "public".to_string(),
        },
    }
}

/// State wired to the mock provider; `provider_enabled = false` simulates
/// an unreachable upstream.
pub fn test_state(provider_enabled: bool) -> AppState {
    AppState {
        config: test_config(),
        text_provider: Arc::new(MockTextProvider::new(provider_enabled)),
    }
}
