//! Correction endpoint
//!
//! `POST /api/correct` takes `{ text, tone }` and returns a `CorrectionResult`.
//! Upstream failures are logged with detail and returned as one opaque code.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types::{ApiErrorBody, CorrectionRequest};
use std::time::Instant;

use crate::api::ApiState;
use crate::corrector::CorrectionError;

#[derive(Debug, Clone, Copy)]
pub enum CorrectErrorCode {
    EmptyInput,
    CorrectionFailed,
}

impl CorrectErrorCode {
    fn as_str(&self) -> &'static str {
        match self {
            CorrectErrorCode::EmptyInput => "EMPTY_INPUT",
            CorrectErrorCode::CorrectionFailed => "CORRECTION_FAILED",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CorrectErrorCode::EmptyInput => StatusCode::BAD_REQUEST,
            CorrectErrorCode::CorrectionFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

fn correct_error(code: CorrectErrorCode, message: &str) -> Response {
    (
        code.status_code(),
        Json(ApiErrorBody::new(code.as_str(), message)),
    )
        .into_response()
}

pub async fn correct_text(
    State(state): State<ApiState>,
    Json(req): Json<CorrectionRequest>,
) -> Response {
    let request_id = ulid::Ulid::new().to_string();

    if req.text.trim().is_empty() {
        tracing::debug!(request_id = %request_id, "Rejected empty correction request");
        return correct_error(CorrectErrorCode::EmptyInput, "Input text cannot be empty");
    }

    let started = Instant::now();
    let chars = req.text.chars().count();
    tracing::info!(request_id = %request_id, tone = %req.tone, chars, "Correction requested");

    let corrector = state.app_state.corrector();
    match corrector.correct(&req.text, req.tone).await {
        Ok(result) => {
            tracing::info!(
                request_id = %request_id,
                latency_ms = started.elapsed().as_millis() as u64,
                corrected_chars = result.corrected_text.chars().count(),
                "Correction completed"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(CorrectionError::EmptyInput) => {
            correct_error(CorrectErrorCode::EmptyInput, "Input text cannot be empty")
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                latency_ms = started.elapsed().as_millis() as u64,
                "Correction failed"
            );
            correct_error(
                CorrectErrorCode::CorrectionFailed,
                "Correction service unavailable",
            )
        }
    }
}
