//! Gemini `generateContent` client with structured JSON output.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{CorrectionResult, Tone};

use super::prompt::{build_prompt, response_schema, SYSTEM_INSTRUCTION};
use super::{CorrectionError, CorrectionService};
use crate::config::Config;

/// Upper bound on upstream error bodies copied into logs.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Clone)]
pub struct GeminiCorrector {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl GeminiCorrector {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            temperature,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            client,
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
            config.temperature,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CorrectionService for GeminiCorrector {
    async fn correct(&self, text: &str, tone: Tone) -> Result<CorrectionResult, CorrectionError> {
        if text.trim().is_empty() {
            return Err(CorrectionError::EmptyInput);
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CorrectionError::MissingApiKey)?;

        let body = build_request_body(text, tone, self.temperature);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CorrectionError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| CorrectionError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CorrectionError::UpstreamStatus {
                status: status.as_u16(),
                body: raw.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        parse_generate_response(&raw)
    }
}

pub fn build_request_body(text: &str, tone: Tone, temperature: f32) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": build_prompt(text, tone) }]
            }
        ],
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
            "temperature": temperature
        }
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Decode a `generateContent` response body into a `CorrectionResult`.
///
/// The model's JSON answer is the concatenated text parts of the first candidate.
pub fn parse_generate_response(raw: &str) -> Result<CorrectionResult, CorrectionError> {
    let envelope: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| CorrectionError::MalformedResponse(format!("envelope: {e}")))?;

    let text: String = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(CorrectionError::EmptyResponse);
    }

    serde_json::from_str::<CorrectionResult>(&text)
        .map_err(|e| CorrectionError::MalformedResponse(e.to_string()))
}
