//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the axum correction proxy (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// ============================================================================
// Input gate
// ============================================================================

/// Drafts whose trimmed length is at or below this many characters are never analyzed.
pub const MIN_ANALYZE_CHARS: usize = 3;

/// True when `text` is long enough to be sent for correction.
pub fn exceeds_min_length(text: &str) -> bool {
    text.trim().chars().count() > MIN_ANALYZE_CHARS
}

// ============================================================================
// Tone
// ============================================================================

/// Stylistic target applied to a correction request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../polish-ui/src/types/generated.ts")]
pub enum Tone {
    #[default]
    Professional,
    Academic,
    Casual,
    Creative,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Academic,
        Tone::Casual,
        Tone::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Academic => "Academic",
            Self::Casual => "Casual",
            Self::Creative => "Creative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTone(pub String);

impl fmt::Display for UnknownTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tone: {}", self.0)
    }
}

impl std::error::Error for UnknownTone {}

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

// ============================================================================
// API Types
// ============================================================================

/// Client → Server: text to correct and the tone to aim for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../polish-ui/src/types/generated.ts")]
pub struct CorrectionRequest {
    pub text: String,
    pub tone: Tone,
}

/// Server → Client: corrected text plus a markdown summary of the edits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../polish-ui/src/types/generated.ts")]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub changes_summary: String,
    /// Tone the model reports it applied or detected; free text.
    pub tone: String,
}

/// Machine-readable error payload returned with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../polish-ui/src/types/generated.ts")]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../polish-ui/src/types/generated.ts")]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

impl ApiErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_min_length_is_strictly_greater_than() {
        assert!(!exceeds_min_length(""));
        assert!(!exceeds_min_length("a"));
        assert!(!exceeds_min_length("abc"));
        assert!(!exceeds_min_length("  abc \n"));
        assert!(exceeds_min_length("abcd"));
        assert!(exceeds_min_length("helo wrld"));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // three characters, six bytes
        assert!(!exceeds_min_length("ééé"));
        assert!(exceeds_min_length("éééé"));
    }

    #[test]
    fn test_tone_serialization_uses_variant_names() {
        let json = serde_json::to_string(&Tone::Casual).unwrap();
        assert_eq!(json, "\"Casual\"");

        let tone: Tone = serde_json::from_str("\"Academic\"").unwrap();
        assert_eq!(tone, Tone::Academic);
    }

    #[test]
    fn test_tone_from_str() {
        assert_eq!("creative".parse::<Tone>(), Ok(Tone::Creative));
        assert_eq!(" Professional ".parse::<Tone>(), Ok(Tone::Professional));
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn test_default_tone_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_correction_result_uses_camel_case() {
        let result = CorrectionResult {
            corrected_text: "Hello world".to_string(),
            changes_summary: "- Fixed spelling".to_string(),
            tone: "Casual".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["correctedText"], "Hello world");
        assert_eq!(value["changesSummary"], "- Fixed spelling");
        assert_eq!(value["tone"], "Casual");
    }

    #[test]
    fn test_correction_result_requires_all_fields() {
        let missing = r#"{"correctedText":"x","tone":"Casual"}"#;
        assert!(serde_json::from_str::<CorrectionResult>(missing).is_err());
    }

    #[test]
    fn test_api_error_body_shape() {
        let body = ApiErrorBody::new("EMPTY_INPUT", "Input text cannot be empty");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"]["code"], "EMPTY_INPUT");
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        Tone::export(&config).unwrap();
        CorrectionRequest::export(&config).unwrap();
        CorrectionResult::export(&config).unwrap();
        ApiErrorDetail::export(&config).unwrap();
        ApiErrorBody::export(&config).unwrap();
    }
}
