// File: src/jsonish.rs

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::lines::{self, ExtractError};

/// One entry of an [`extract_json`] result.
///
/// The result list is heterogeneous on purpose: entries whose payload parsed
/// become `Decoded`, everything else stays `Raw`. Callers pattern-match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommentEntry {
    Decoded(Value),  // payload parsed as JSON (possibly nested)
    Raw(String),     // kept verbatim, pre-substitution
}

/// Extracts comment lines like [`lines::extract`] and decodes each entry's
/// JSON-ish payload where possible.
///
/// Payloads written as Python-style list literals (`['Yes', 'No']`) are
/// coerced into JSON before parsing. Entries that still fail to parse fall
/// back to the filtered string untouched; no error is surfaced for them.
/// Line-number prefixes are never emitted here, they would defeat the parse.
pub fn extract_json(
    filepath: impl AsRef<Path>,
    comment_indicator: &str,
    keyword: &str,
    keyword_begins: i32,
) -> Result<Vec<CommentEntry>, ExtractError> {
    let filtered = lines::extract(filepath, comment_indicator, keyword, keyword_begins, false)?;
    Ok(filtered.into_iter().map(decode_line).collect())
}

pub(crate) fn decode_line(text: String) -> CommentEntry {
    match try_decode(&text) {
        Some(value) => CommentEntry::Decoded(value),
        None => {
            debug!(text = %text, "JSON decode failed, keeping raw text");
            CommentEntry::Raw(text)
        }
    }
}

/// Attempts to parse `text` as JSON after coercing single-quoted list syntax.
///
/// The substitutions are heuristic, not a quoting fix: unbalanced or nested
/// quotes stay broken and the parse fails, which callers treat as "not JSON".
pub fn try_decode(text: &str) -> Option<Value> {
    let candidate = text
        .replace("['", "[\"")
        .replace("']", "\"]")
        .replace("',", "\",")
        .replace(", '", ", \"");
    serde_json::from_str(&candidate).ok()
}
