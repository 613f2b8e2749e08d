//! JSON extraction from LLM replies.
//!
//! Models are asked for plain JSON but routinely wrap it in markdown
//! code fences or surround it with prose. Extraction tries, in order:
//! direct parse, fenced block, first `{...}` span.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn fenced_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").unwrap())
}

fn bare_object() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").unwrap())
}

/// Extract the first JSON object from a reply, or `None` when nothing
/// in it parses.
pub fn extract_json(response: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(response) {
        return Some(value);
    }

    if let Some(caps) = fenced_block().captures(response) {
        if let Ok(value) = serde_json::from_str(caps.get(1)?.as_str()) {
            return Some(value);
        }
    }

    if let Some(m) = bare_object().find(response) {
        if let Ok(value) = serde_json::from_str(m.as_str()) {
            return Some(value);
        }
    }

    None
}
