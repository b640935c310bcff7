//! Request and response payloads for the relay endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate-answer`.
///
/// Absent fields deserialize to empty strings and interpolate as empty
/// text into the prompt.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub context: String,
}

/// Body of `POST /generate-image`. Parsed when present, never acted on.
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Fixed payload returned by the image stub.
#[derive(Debug, Serialize)]
pub struct ImageStubResponse {
    pub error: String,
    pub placeholder: String,
}
