//! Small text helpers shared across the scanner and the field extractors.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMPHASIS_RE: Regex = Regex::new(r"_([^_]+)_").unwrap();
    static ref MULTI_WS_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Fraction glyphs the OCR transcription uses in quantities.
pub(crate) const FRACTION_GLYPHS: &[char] = &['¼', '½', '¾', '⅓', '⅔', '⅛', '⅜', '⅝', '⅞'];

/// True when the whole line sits inside the italic-transcription markers.
pub(crate) fn is_emphasis_wrapped(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('_') && line.ends_with('_')
}

/// Inner text of an emphasis-wrapped line. Caller must check the wrapping first.
pub(crate) fn emphasis_content(line: &str) -> &str {
    line[1..line.len() - 1].trim()
}

/// Remove `_…_` markers, keeping the emphasized text.
pub(crate) fn unwrap_emphasis(text: &str) -> String {
    EMPHASIS_RE.replace_all(text, "$1").into_owned()
}

/// Join all whitespace runs (including line breaks) into single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    MULTI_WS_RE.replace_all(text.trim(), " ").into_owned()
}

/// Trim surrounding ASCII and typographic double quotes, the way corpus titles
/// are inconsistently wrapped.
pub(crate) fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches(|c| matches!(c, '"' | '“' | '”'))
}
