//! Answer endpoint.
//!
//! Translates a question plus context into a single-turn Gemini prompt and
//! passes the upstream response body through unmodified.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::AppError;
use crate::models::AnswerRequest;
use crate::startup::AppState;

/// Build the prompt sent upstream.
fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "Based on the following information about 'Oasis City', answer the user's question. \
         If the information is not directly available, state that you don't have enough details.\
         \n\nOasis City Information:\n{context}\n\nUser's Question: \"{question}\"\n\nAI Answer:"
    )
}

pub async fn generate_answer(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = build_prompt(&payload.question, &payload.context);

    let body = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Error calling Gemini API");
        e
    })?;

    Ok((StatusCode::OK, Json(body)))
}
