//! Structured-response contracts for each job.

use clickforge_core::{AnalysisResult, ComboIdeaBatch, ScriptResult};
use clickforge_error::{ContractError, ContractErrorKind};
use serde::de::DeserializeOwned;

use crate::Schema;

/// A record a model must return as JSON matching [`StructuredResponse::schema`].
///
/// Validation is structural only: field presence and JSON types. Prose length
/// and section counts are not checked.
///
/// # Examples
///
/// ```
/// use clickforge_core::AnalysisResult;
/// use clickforge_studio::StructuredResponse;
///
/// let raw = r#"
///     {"opinion": "Works", "strengths": [], "weaknesses": ["vague"],
///      "improvements": [], "competition": "Listicles"}
/// "#;
/// let analysis = AnalysisResult::parse_response(raw).unwrap();
/// assert_eq!(analysis.weaknesses, vec!["vague".to_string()]);
///
/// assert!(AnalysisResult::parse_response(r#"{"opinion": "Works"}"#).is_err());
/// ```
pub trait StructuredResponse: DeserializeOwned {
    /// Declared shape, attached to the outbound call.
    fn schema() -> Schema;

    /// Parse raw response text into the record.
    fn parse_response(raw: &str) -> Result<Self, ContractError> {
        parse_structured(&Self::schema(), raw)
    }
}

/// Trim, unwrap a Markdown code fence if present, parse, validate, deserialize.
pub fn parse_structured<T: DeserializeOwned>(schema: &Schema, raw: &str) -> Result<T, ContractError> {
    let text = strip_code_fence(raw.trim());

    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        let preview: String = text.chars().take(100).collect();
        tracing::error!(error = %e, json_preview = %preview, "Response is not JSON");
        ContractError::new(ContractErrorKind::InvalidJson(e.to_string()))
    })?;

    schema.validate(&value).inspect_err(|e| {
        tracing::error!(error = %e.kind, "Response does not match its schema");
    })?;

    serde_json::from_value(value)
        .map_err(|e| ContractError::new(ContractErrorKind::InvalidJson(e.to_string())))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.trim_end().strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}

impl StructuredResponse for AnalysisResult {
    fn schema() -> Schema {
        Schema::object([
            ("opinion", Schema::String),
            ("strengths", Schema::array_of(Schema::String)),
            ("weaknesses", Schema::array_of(Schema::String)),
            ("improvements", Schema::array_of(Schema::String)),
            ("competition", Schema::String),
        ])
    }
}

impl StructuredResponse for ComboIdeaBatch {
    fn schema() -> Schema {
        Schema::object([(
            "combinations",
            Schema::array_of(Schema::object([
                ("title", Schema::String),
                ("thumbnailPrompt", Schema::String),
            ])),
        )])
    }
}

impl StructuredResponse for ScriptResult {
    fn schema() -> Schema {
        Schema::object([
            ("title", Schema::String),
            ("hook", Schema::String),
            (
                "sections",
                Schema::array_of(Schema::object([
                    ("heading", Schema::String),
                    ("content", Schema::String),
                    ("visuals", Schema::String),
                ])),
            ),
            ("cta", Schema::String),
            ("outro", Schema::String),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::strip_code_fence;

    #[test]
    fn fences_are_removed() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
    }

    #[test]
    fn unfenced_text_is_untouched() {
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```{\"a\": 1}"), "```{\"a\": 1}");
    }
}
