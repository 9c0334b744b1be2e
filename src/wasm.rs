use wasm_bindgen::prelude::*;

use crate::jsonish::{decode_line, CommentEntry};
use crate::lines;

// This struct helps the JavaScript frontend understand the result easily.
// We derive Serialize so we can return it as a JSON string.
#[derive(serde::Serialize)]
struct WasmResult {
    entries: Vec<CommentEntry>,
}

#[wasm_bindgen]
pub fn run_extract(
    source: &str,
    comment_indicator: &str,
    keyword: &str,
    keyword_begins: i32,
) -> String {
    // 1. Filter the comment lines (line numbers stay off, they would defeat the parse)
    let filtered =
        lines::extract_from_str(source, comment_indicator, keyword, keyword_begins, false);

    // 2. Decode each payload; failures stay raw strings
    let entries: Vec<CommentEntry> = filtered.into_iter().map(decode_line).collect();

    let result = WasmResult { entries };
    serde_json::to_string(&result).unwrap_or_default()
}
