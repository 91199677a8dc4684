use std::sync::Arc;

use bon::Builder;
use serde_json::Value;
use tracing::{debug, info};

use crate::models::outcome::ExtractionOutcome;
use crate::traits::chat_api::ChatApi;

/// Instruction prompt sent as the system turn of every extraction request.
/// The remote model does all of the actual parsing work; this string is the
/// whole behavioral contract.
pub const SYSTEM_PROMPT: &str = r#"I will provide you with multiple text blocks containing names, addresses, phone numbers, and sometimes email IDs or course amounts.

Please convert each block into a JSON object with only three fields:

"name" – Properly capitalized.

"address" – Merge all address lines including the pincode into one line, separated by commas.

"phone" – Return as a string. If there are multiple phone numbers, put them in an array of strings. Remove country codes like +91 and whitespace inside numbers.

Do not include email, course amount, or any other fields.
Output should be a JSON array of objects.

Here's the format to follow:

[
  {
    "name": "Full Name",
    "address": "Full address, including pincode",
    "phone": "Phone number as string or array"
  }
]

Return ONLY the final JSON array as valid JSON, with no additional text, no code fences, and no explanations."#;

/// Service that wraps `ChatApi` and turns free-form contact blocks into a
/// JSON payload.
#[derive(Builder)]
pub struct Extractor {
    chat_api: Arc<dyn ChatApi>,
}

impl Extractor {
    /// Sends the caller's text (untrimmed) as the user turn and applies the
    /// best-effort JSON extraction to the completion.
    pub async fn extract(
        &self,
        text: &str,
    ) -> Result<ExtractionOutcome, Box<dyn std::error::Error + Send + Sync>> {
        info!(text_len = text.len(), "extract: start");
        let completion = self.chat_api.call_chat_api(SYSTEM_PROMPT, text).await?;
        debug!(completion_len = completion.len(), "extract: chat api returned");
        let outcome = parse_completion(&completion);
        info!(parsed = outcome.is_records(), "extract: done");
        Ok(outcome)
    }
}

/// Best-effort JSON extraction over a completion.
///
/// The candidate document is the slice from the first `[` to the last `]`
/// (inclusive) when that span exists, otherwise the whole completion. A
/// candidate that fails to parse falls back to the raw completion text,
/// not the candidate slice.
pub fn parse_completion(completion: &str) -> ExtractionOutcome {
    let candidate = match (completion.find('['), completion.rfind(']')) {
        (Some(start), Some(end)) if end > start => &completion[start..=end],
        _ => completion,
    };
    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => ExtractionOutcome::Records(value),
        Err(_) => ExtractionOutcome::RawText(completion.to_string()),
    }
}
