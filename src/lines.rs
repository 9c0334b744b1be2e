// File: src/lines.rs

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

#[derive(Debug)]
pub enum ExtractError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtractError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Io { source, .. } => Some(source),
        }
    }
}

/// Extracts data stored in comment lines of the file at `filepath`.
///
/// A line counts as a comment when, after trimming whitespace, it starts with
/// the literal `comment_indicator`. The indicator (and, when filtering, the
/// `keyword`) is then removed from both ends by *character set*: any run of
/// characters occurring in the indicator/keyword string is stripped, not just
/// the exact substring. Multi-character indicators therefore strip more than
/// the matched prefix. Kept for compatibility with files produced against
/// that behavior.
///
/// `keyword_begins` selects where a non-empty `keyword` must sit, by sign:
/// negative means the comment text starts with it, positive means it ends
/// with it, zero means it occurs anywhere. `show_line` prefixes each entry
/// with `"Line N: "` (1-based).
pub fn extract(
    filepath: impl AsRef<Path>,
    comment_indicator: &str,
    keyword: &str,
    keyword_begins: i32,
    show_line: bool,
) -> Result<Vec<String>, ExtractError> {
    let path = filepath.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_from_str(
        &source,
        comment_indicator,
        keyword,
        keyword_begins,
        show_line,
    ))
}

/// In-memory core of [`extract`]; operates on already-read text.
pub fn extract_from_str(
    source: &str,
    comment_indicator: &str,
    keyword: &str,
    keyword_begins: i32,
    show_line: bool,
) -> Vec<String> {
    let mut pre_extracted: Vec<(usize, &str)> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with(comment_indicator) {
            pre_extracted.push((idx + 1, trim_char_set(line, comment_indicator)));
        }
    }
    trace!(comment_lines = pre_extracted.len(), "scanned source");

    let mut filtered = Vec::new();
    for (line_number, line_text) in pre_extracted {
        let text = line_text.trim();
        let line_prefix = if show_line {
            format!("Line {}: ", line_number)
        } else {
            String::new()
        };

        if keyword.is_empty() {
            filtered.push(format!("{}{}", line_prefix, text));
            continue;
        }

        // Inclusion is decided on the full text; the emitted entry has the
        // keyword's character set stripped from both ends.
        let extracted = trim_char_set(text, keyword).trim();
        let matched = match keyword_begins.cmp(&0) {
            Ordering::Less => text.starts_with(keyword),
            Ordering::Greater => text.ends_with(keyword),
            Ordering::Equal => text.contains(keyword),
        };
        if matched {
            filtered.push(format!("{}{}", line_prefix, extracted));
        }
    }

    filtered
}

// Character-set strip: removes any leading/trailing characters that occur in
// `set`, however ordered or repeated.
#[inline]
fn trim_char_set<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_matches(|c: char| set.contains(c))
}

#[cfg(test)]
mod tests {
    use super::{extract, extract_from_str, ExtractError};
    use std::fs;
    use std::path::PathBuf;

    fn write_sample(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write sample");
        path
    }

    #[test]
    fn no_comment_lines_yields_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "plain.txt", "plain text\nanother line\n\n");
        let out = extract(&path, "#", "", -1, false).expect("extract");
        assert!(out.is_empty());
    }

    #[test]
    fn preserves_source_order_and_duplicates() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "dup.txt", "# first\ncode here\n# second\n# second\n");
        let out = extract(&path, "#", "", -1, false).expect("extract");
        assert_eq!(out, vec!["first", "second", "second"]);
    }

    #[test]
    fn line_numbers_are_one_based() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "numbered.txt", "code\n# alpha\n\n# beta\n");
        let out = extract(&path, "#", "", -1, true).expect("extract");
        assert_eq!(out, vec!["Line 2: alpha", "Line 4: beta"]);
    }

    #[test]
    fn rerun_on_unchanged_file_is_identical() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "stable.txt", "# one\n# two\n");
        let first = extract(&path, "#", "", -1, true).expect("extract");
        let second = extract(&path, "#", "", -1, true).expect("extract");
        assert_eq!(first, second);
    }

    #[test]
    fn keyword_at_start_filters_other_comments() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "opts.txt", "# Options: ['A']\n# Note: something\n");
        let out = extract(&path, "#", "Options:", -1, false).expect("extract");
        assert_eq!(out, vec!["['A']"]);
    }

    #[test]
    fn keyword_at_end_filters_other_comments() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "tail.txt", "# ready Options:\n# Options: at start\n");
        let out = extract(&path, "#", "Options:", 1, false).expect("extract");
        assert_eq!(out, vec!["ready"]);
    }

    #[test]
    fn keyword_within_strips_its_character_set_from_both_ends() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "within.txt", "# see Options: here\n# nothing else\n");
        let out = extract(&path, "#", "Options:", 0, false).expect("extract");
        // Leading "s" of "see" belongs to the keyword's character set, so it
        // goes too. That stripping is part of the contract.
        assert_eq!(out, vec!["ee Options: here"]);
    }

    #[test]
    fn multi_character_indicator_strips_as_a_set() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_sample(&temp, "slashes.txt", "//// padded //\n/ single slash\n");
        let out = extract(&path, "//", "", -1, false).expect("extract");
        assert_eq!(out, vec!["padded"]);
    }

    #[test]
    fn mixed_indicator_set_applies_to_both_ends() {
        let out = extract_from_str("#! shebang-ish #\n!# reversed\n", "#!", "", -1, false);
        // "!# reversed" does not start with the literal "#!" prefix.
        assert_eq!(out, vec!["shebang-ish"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let absent = temp.path().join("absent.txt");
        let err = extract(&absent, "#", "", -1, false).expect_err("should fail");
        match err {
            ExtractError::Io { path, .. } => assert_eq!(path, absent),
        }
    }
}
