//! Instruction assembly.
//!
//! Walks the span paragraph by paragraph, after skipping the leading tip
//! notes. Named sub-component blocks ("_Ham Filling:_ …", "Streusel
//! Topping: …") are filed into a side list and appended after the main
//! stream, so the narrative reads continuously and the components follow in
//! their order of appearance.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extractors::notes::is_yield_annotation;
use crate::extractors::paragraphs;
use crate::text::{collapse_whitespace, emphasis_content, is_emphasis_wrapped, unwrap_emphasis};

/// Verbs that open a narrative instruction paragraph.
const INSTRUCTION_VERBS: &[&str] = &[
    "mix", "stir", "beat", "add", "heat", "lay", "make", "pour", "blend", "bake", "try", "wash",
    "bring", "form", "use", "follow", "drop", "spoon",
];

lazy_static! {
    static ref EMPHASIS_LABEL_RE: Regex = Regex::new(r"^_(.*?):_").unwrap();
    static ref PLAIN_LABEL_RE: Regex =
        Regex::new(r"^[A-Z][A-Za-z\s]+\s*(?:Filling|Topping|Syrup|Trick):").unwrap();
    static ref TIMING_RE: Regex = Regex::new(r"^\d+\s+to\s+\d+\s+min\.?$").unwrap();
    // "2 cups Bisquick" / "Bisquick 2 cups": the shape of a stray ingredient line.
    static ref INGREDIENT_SHAPE_RE: Regex = Regex::new(r"^\s*(?:\d|[A-Za-z]+\s+\d)").unwrap();
    static ref WRAPPED_SERVINGS_RE: Regex =
        Regex::new(r"\s*_\d+(?:\s*to\s*\d+)?\s*servings\._\s*$").unwrap();
    static ref WRAPPED_MAKES_RE: Regex = Regex::new(r"(?i)\s*_makes[^_]*_\s*$").unwrap();
    static ref BARE_YIELD_RE: Regex = Regex::new(
        r"(?i)\s*\b(?:makes|serves|servings?)\s+(?:about\s+)?\d+(?:\s*to\s*\d+)?[¼½¾⅓⅔⅛⅜⅝⅞]?\.*\s*$"
    )
    .unwrap();
    // Cross-reference dash: "batter (p. 2)— fold in …" reads as an exception
    // to the referenced base recipe.
    static ref CROSS_REF_DASH_RE: Regex = Regex::new(r"—\s*(?:except\s+)?").unwrap();
}

/// Assemble the narrative instructions for a recipe span.
pub fn extract_instructions(text: &str) -> String {
    let paras: Vec<&str> = paragraphs(text).collect();

    // Skip the leading tip notes. A wrapped yield/timing annotation stops the
    // skip and falls through to the paragraph loop, which knows what to keep.
    let mut start = 0;
    while start < paras.len() {
        let para = paras[start].trim();
        if !is_emphasis_wrapped(para) || is_yield_annotation(emphasis_content(para)) {
            break;
        }
        start += 1;
    }

    let mut stream: Vec<String> = Vec::new();
    let mut side: Vec<String> = Vec::new();

    for paragraph in &paras[start..] {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        // "_Ham Filling:_ Blend …" → "Ham Filling: Blend …" in the side list.
        if EMPHASIS_LABEL_RE.is_match(paragraph) {
            let single = collapse_whitespace(paragraph);
            if let Some(captures) = EMPHASIS_LABEL_RE.captures(&single) {
                let label = captures.get(1).map_or("", |m| m.as_str()).trim();
                let rest = single[captures.get(0).map_or(0, |m| m.end())..].trim();
                side.push(collapse_whitespace(&format!("{label}: {rest}")));
                continue;
            }
        }

        // Plain "Streusel Topping: …" sub-component labels.
        if PLAIN_LABEL_RE.is_match(paragraph) {
            side.push(collapse_whitespace(paragraph));
            continue;
        }

        // Of the remaining wrapped paragraphs only a bare timing phrase
        // survives, as plain text; other annotations were already consumed by
        // the note and serving extractors.
        if is_emphasis_wrapped(paragraph) {
            let content = emphasis_content(paragraph).to_lowercase();
            if TIMING_RE.is_match(&content) {
                stream.push(collapse_whitespace(&content));
            }
            continue;
        }

        // Leftover ingredient block, consumed elsewhere.
        if paragraph
            .lines()
            .filter(|line| !line.trim().is_empty())
            .all(|line| INGREDIENT_SHAPE_RE.is_match(line))
        {
            continue;
        }

        if opens_with_instruction_verb(paragraph) {
            let processed = WRAPPED_SERVINGS_RE.replace(paragraph, "");
            let processed = WRAPPED_MAKES_RE.replace(&processed, "");
            let processed = BARE_YIELD_RE.replace(&processed, "");
            let processed = unwrap_emphasis(&processed);
            let processed = CROSS_REF_DASH_RE.replace_all(&processed, "—except ");
            let processed = collapse_whitespace(&processed);
            if !processed.is_empty() {
                stream.push(processed);
            }
        }
    }

    stream.extend(side);
    stream.join(" ")
}

fn opens_with_instruction_verb(paragraph: &str) -> bool {
    paragraph
        .split_whitespace()
        .next()
        .map(|word| {
            word.trim_end_matches(|c: char| !c.is_alphabetic())
                .to_lowercase()
        })
        .is_some_and(|word| INSTRUCTION_VERBS.contains(&word.as_str()))
}
