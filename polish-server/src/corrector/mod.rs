//! Correction service seam
//!
//! The HTTP layer only sees [`CorrectionService`]; the hosted-model client
//! lives in [`gemini`]. Tests swap in their own implementation.

use async_trait::async_trait;
use shared_types::{CorrectionResult, Tone};

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiCorrector;

#[derive(Debug, thiserror::Error)]
pub enum CorrectionError {
    #[error("Input text cannot be empty")]
    EmptyInput,
    #[error("missing API key environment variable: GEMINI_API_KEY")]
    MissingApiKey,
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("No response from AI")]
    EmptyResponse,
    #[error("malformed correction payload: {0}")]
    MalformedResponse(String),
}

impl CorrectionError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::MissingApiKey => "missing_api_key",
            Self::Transport(_) => "transport",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Opaque text-correction backend: `(text, tone) -> CorrectionResult`.
#[async_trait]
pub trait CorrectionService: Send + Sync {
    async fn correct(&self, text: &str, tone: Tone) -> Result<CorrectionResult, CorrectionError>;
}
