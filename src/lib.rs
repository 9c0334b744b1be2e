pub mod jsonish;
pub mod lines;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export for easy access
pub use jsonish::{extract_json, try_decode, CommentEntry};
pub use lines::{extract, extract_from_str, ExtractError};
