//! Prompt, system instruction and response schema sent with every correction.

use serde_json::{json, Value};
use shared_types::Tone;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert copy editor and linguist. Your goal is to elevate the user's writing to a native, professional standard while strictly preserving their intent.";

pub fn build_prompt(text: &str, tone: Tone) -> String {
    format!(
        r#"
Analyze and correct the following text.
Target Tone: {tone}.

Task:
1. Fix all grammatical, spelling, and punctuation errors.
2. Improve sentence structure and flow without changing the core meaning.
3. Ensure the tone matches the requested '{tone}' style.
4. Provide a summary of changes.

Input Text:
"""
{text}
"""
"#
    )
}

/// JSON schema (Gemini `Schema` dialect) for a `CorrectionResult`.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "correctedText": {
                "type": "STRING",
                "description": "The fully corrected text with all grammar, spelling, punctuation, and style errors fixed. Preserve the original meaning."
            },
            "changesSummary": {
                "type": "STRING",
                "description": "A concise bulleted list (using markdown) explaining the key grammatical and stylistic changes made. Focus on the 'why'."
            },
            "tone": {
                "type": "STRING",
                "description": "The detected or applied tone of the text."
            }
        },
        "required": ["correctedText", "changesSummary", "tone"]
    })
}
