use gloo_net::http::Request;
use shared_types::{ApiErrorBody, CorrectionRequest, CorrectionResult, Tone};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    api_base_for_host(&hostname).to_string()
}

fn api_base_for_host(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080"
    } else {
        ""
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Ask the server to correct `text` in the given tone.
///
/// No timeout is applied; a slow request is simply superseded by newer ones.
pub async fn request_correction(text: &str, tone: Tone) -> Result<CorrectionResult, String> {
    let url = format!("{}/api/correct", api_base());

    let request = CorrectionRequest {
        text: text.to_string(),
        tone,
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        let status = response.status();
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.code)
            .unwrap_or_default();
        return Err(http_error_message(status, &detail));
    }

    response
        .json::<CorrectionResult>()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

fn http_error_message(status: u16, code: &str) -> String {
    if code.is_empty() {
        format!("HTTP error: {status}")
    } else {
        format!("HTTP error: {status} ({code})")
    }
}
