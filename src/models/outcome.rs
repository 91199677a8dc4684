use serde::Serialize;
use serde_json::Value;

/// Result of the best-effort JSON extraction over a model completion.
///
/// Serialized untagged: callers receive either the parsed JSON value or the
/// raw completion text, never a wrapper object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    /// The candidate substring parsed as JSON. Shape is not validated; an
    /// object or a bare number is returned as-is.
    Records(Value),
    /// The completion text, verbatim, after a parse failure.
    RawText(String),
}

impl ExtractionOutcome {
    pub fn is_records(&self) -> bool {
        matches!(self, Self::Records(_))
    }
}
