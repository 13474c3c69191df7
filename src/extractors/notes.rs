//! Leading-note extraction.
//!
//! Recipe annotations ("_An old-time favorite in the Deep South…_") open the
//! span as an emphasis-wrapped line. Yield and timing annotations use the same
//! wrapping, so a candidate is rejected when it reads like one. Only the
//! paragraph-opening line is eligible: a note-like line deeper in the span
//! belongs to the body, not the header.

use crate::text::{emphasis_content, is_emphasis_wrapped};

/// True for emphasis-wrapped content that states a yield or a baking time
/// rather than a note. Shared with the instruction extractor's intro skip.
pub(crate) fn is_yield_annotation(content: &str) -> bool {
    let lower = content.to_lowercase();
    ["makes", "servings", "about"]
        .iter()
        .any(|word| lower.contains(word))
        || lower.ends_with("min.")
        || lower.ends_with("min")
}

/// Extract the span's leading note, or an empty string.
pub fn extract_notes(text: &str) -> String {
    let Some(first) = text.lines().next() else {
        return String::new();
    };
    let line = first.trim();
    if !is_emphasis_wrapped(line) {
        return String::new();
    }
    let note = emphasis_content(line);
    if is_yield_annotation(note) {
        return String::new();
    }
    note.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_note_is_extracted() {
        let body = "_An age-old way to make hot biscuits._\n\n2 cups Bisquick\n";
        assert_eq!(extract_notes(body), "An age-old way to make hot biscuits.");
    }

    #[test]
    fn test_yield_annotation_is_not_a_note() {
        assert_eq!(extract_notes("_Makes 15 to 20._\n\nMix well.\n"), "");
        assert_eq!(extract_notes("_8 to 10 min._\n\nMix well.\n"), "");
        assert_eq!(extract_notes("_About enough for two pies._\n"), "");
    }

    #[test]
    fn test_parenthesized_line_is_not_a_note() {
        let body = "(_Pictured on inside of back cover._)\n\n1 egg\n";
        assert_eq!(extract_notes(body), "");
    }

    #[test]
    fn test_only_the_opening_line_is_eligible() {
        // The second line would qualify, but the scan stops after the first.
        let body = "1 cup sugar\n_Perfect match for smoked ham._\n";
        assert_eq!(extract_notes(body), "");
    }

    #[test]
    fn test_note_with_inner_quotes() {
        let body = "_\"Old country\" flavor without old-time fussing._\n\n1¼ cups Bisquick\n";
        assert_eq!(
            extract_notes(body),
            "\"Old country\" flavor without old-time fussing."
        );
    }
}
