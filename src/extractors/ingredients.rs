//! Ingredient classification and cleaning.
//!
//! Two extraction modes run per paragraph, in original order. A paragraph
//! opening with "Mix" carries its ingredients inline in the first sentence
//! ("Mix 1 cup corn meal, 1 cup Bisquick, … and 1 cup milk. Drop with
//! spoon…"); everything else is treated as a block of one-ingredient lines.
//! Both modes feed the same cleaning rule, and the final list is deduplicated
//! recipe-wide in first-seen order.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::extractors::paragraphs;
use crate::text::{unwrap_emphasis, FRACTION_GLYPHS};
use crate::trace::{self, TraceEvent, TraceSink};

/// Measurement tokens as they appear in the corpus, matched as substrings of
/// the lowercased line.
const UNIT_TOKENS: &[&str] = &[
    "cup", "cups", "qt", "tbsp", "tsp", "oz", "pound", "lb", "pkg", "package", "can",
];

/// Staples that identify an ingredient line even without a unit ("3 eggs").
const INGREDIENT_TOKENS: &[&str] = &[
    "milk", "egg", "butter", "sugar", "salt", "bisquick", "corn", "meal", "cheese", "jam",
    "preserves", "maple", "cream",
];

/// Keywords that mark a line as narrative rather than a quantity.
const INSTRUCTION_KEYWORDS: &[&str] = &[
    "bake", "dust", "makes", "turn", "heat", "drop", "serve", "ends", "spread", "roll",
];

/// Unit abbreviations whose trailing period is not a sentence boundary.
const UNIT_ABBREVIATIONS: &[&str] = &[
    "tsp.", "tbsp.", "oz.", "qt.", "pt.", "lb.", "gal.", "pkg.", "min.", "c.",
];

/// Comma parts carrying these adjectives fold back into the main clause
/// ("butter, melted" → "butter melted").
const DESCRIPTIVE_ADJECTIVES: &[&str] = &["melted", "softened", "chopped", "drained"];

/// Comma parts naming an alternative stay as a trailing list
/// ("blueberries, peaches, or cherries").
const ALTERNATIVE_TOKENS: &[&str] = &["peaches", "cherries", "or"];

lazy_static! {
    static ref ENUMERATION_RE: Regex = Regex::new(r"^\d+\.\s*").unwrap();
    static ref LEADING_MIX_VERB_RE: Regex =
        Regex::new(r"^(?:Mix|Blend|Add|Stir|Beat|Pour|Heat)\s+").unwrap();
    static ref TSP_SALT_RE: Regex = Regex::new(r"(?i)tsp salt").unwrap();
    // The keyword must open a token; "wheat" never truncates at "heat".
    static ref TRAILING_CLAUSE_RE: Regex = Regex::new(
        r"(?i)(?:^|\s)(?:with|into|about|bake|dust|makes|turn|heat|drop|serve|ends|spread|roll)\s+.*$"
    )
    .unwrap();
    static ref IF_DESIRED_RE: Regex = Regex::new(r",?\s*if desired").unwrap();
    // First-line rejection and mid-block line skip: "Heat oven to 450°…",
    // "Make Biscuit dough (p. 3)." and friends.
    static ref PARAGRAPH_REJECT_RE: Regex = Regex::new(
        r"(?i)^(?:Heat|Make|Follow|Bake|Cook|Stir|Pour|Place|Top|Serve|With|Into|About|Use)"
    )
    .unwrap();
    // Cross-page reference to a shared sub-recipe: "dough (p. 3)",
    // "batter (p. 2)", or any other "(p. N)".
    static ref CROSS_REF_RE: Regex = Regex::new(r"\(p\. \d+\)").unwrap();
    // Applied to the lowercased line.
    static ref LINE_VERB_RE: Regex = Regex::new(
        r"^(?:heat|make|follow|bake|cook|stir|pour|place|top|serve|spoon|drop|roll|cut|mix|blend|try|wash|bring|with|into|about|dust|turn|ends|spread)"
    )
    .unwrap();
    static ref INSTRUCTIONAL_PHRASE_RE: Regex = Regex::new(r"spread|roll|etc\.?|like").unwrap();
    static ref ASCII_FRACTION_RE: Regex = Regex::new(r"\d/\d").unwrap();
    static ref MIX_OPEN_RE: Regex = Regex::new(r"(?i)^mix\s+(.*)").unwrap();
}

/// Per-line classification features, combined by [`LineFeatures::is_ingredient`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LineFeatures {
    has_digit: bool,
    has_fraction_glyph: bool,
    has_unit_token: bool,
    has_ingredient_token: bool,
    starts_with_instruction_verb: bool,
    has_instruction_keyword: bool,
    looks_instructional: bool,
    has_preserve_token: bool,
}

impl LineFeatures {
    pub(crate) fn compute(line: &str) -> Self {
        let lower = line.trim().to_lowercase();
        Self {
            has_digit: lower.bytes().any(|b| b.is_ascii_digit()),
            has_fraction_glyph: lower.contains(FRACTION_GLYPHS)
                || ASCII_FRACTION_RE.is_match(&lower),
            has_unit_token: UNIT_TOKENS.iter().any(|token| lower.contains(token)),
            has_ingredient_token: INGREDIENT_TOKENS.iter().any(|token| lower.contains(token)),
            starts_with_instruction_verb: LINE_VERB_RE.is_match(&lower),
            has_instruction_keyword: INSTRUCTION_KEYWORDS
                .iter()
                .any(|token| lower.contains(token)),
            looks_instructional: INSTRUCTIONAL_PHRASE_RE.is_match(&lower),
            has_preserve_token: lower.contains("jam") || lower.contains("preserves"),
        }
    }

    /// Decision table over the features.
    ///
    /// The jam/preserves exception comes first: "serve" hides inside
    /// "preserves", so those lines would otherwise always fail the keyword
    /// check.
    pub(crate) fn is_ingredient(&self) -> bool {
        if self.has_preserve_token && (self.has_digit || self.has_unit_token) {
            return true;
        }
        (self.has_digit || self.has_fraction_glyph)
            && (self.has_unit_token || self.has_ingredient_token)
            && !self.starts_with_instruction_verb
            && !self.has_instruction_keyword
            && !self.looks_instructional
    }
}

/// Extract the cleaned, deduplicated ingredient list from a recipe span.
pub fn extract_ingredients(text: &str, trace: Option<&dyn TraceSink>) -> Vec<String> {
    let mut items = Vec::new();
    for paragraph in paragraphs(text) {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            continue;
        }
        if opens_with_mix(trimmed) {
            collect_mixed_sentence(trimmed, &mut items, trace);
        } else {
            collect_block(trimmed, &mut items, trace);
        }
    }

    let mut seen = HashSet::new();
    items.retain(|item: &String| seen.insert(item.clone()));
    items
}

fn opens_with_mix(paragraph: &str) -> bool {
    paragraph
        .split_whitespace()
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("mix"))
}

/// Mixed-sentence mode: the clause after "Mix " up to the first sentence
/// boundary, split on " and " then on commas.
fn collect_mixed_sentence(paragraph: &str, items: &mut Vec<String>, trace: Option<&dyn TraceSink>) {
    let joined = paragraph
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let Some(captures) = MIX_OPEN_RE.captures(&joined) else {
        return;
    };
    let tail = captures.get(1).map_or("", |m| m.as_str());
    let clause = &tail[..sentence_boundary(tail)];

    for segment in clause.split(" and ") {
        for piece in segment.split(',') {
            let piece = piece.trim();
            if !piece.is_empty() {
                push_cleaned(piece, items, trace);
            }
        }
    }
}

/// Byte offset of the first `.` that actually ends the ingredient clause: a
/// period closing a unit abbreviation ("1 tsp. salt") is not a sentence
/// boundary.
fn sentence_boundary(text: &str) -> usize {
    for (position, _) in text.match_indices('.') {
        let token_start = text[..position]
            .rfind(|c: char| c.is_ascii_whitespace())
            .map_or(0, |at| at + 1);
        let token = &text[token_start..=position];
        if !UNIT_ABBREVIATIONS.contains(&token) {
            return position;
        }
    }
    text.len()
}

/// Block mode: skip the leading note lines, reject narrative or
/// cross-reference paragraphs outright, then classify line by line.
fn collect_block(paragraph: &str, items: &mut Vec<String>, trace: Option<&dyn TraceSink>) {
    let lines: Vec<&str> = paragraph.lines().map(str::trim).collect();
    let mut start = 0;
    while start < lines.len() && (lines[start].is_empty() || lines[start].starts_with('_')) {
        start += 1;
    }
    let Some(first) = lines.get(start) else {
        return;
    };
    if PARAGRAPH_REJECT_RE.is_match(first) || CROSS_REF_RE.is_match(first) {
        // Reference-only recipe ("Make Biscuit dough (p. 3).") — its
        // ingredients live on another page.
        return;
    }
    for line in &lines[start..] {
        if line.is_empty() || line.starts_with('_') || line.starts_with('[') {
            continue;
        }
        if PARAGRAPH_REJECT_RE.is_match(line) {
            continue;
        }
        if LineFeatures::compute(line).is_ingredient() {
            push_cleaned(line, items, trace);
        }
    }
}

fn push_cleaned(raw: &str, items: &mut Vec<String>, trace: Option<&dyn TraceSink>) {
    match clean_ingredient(raw) {
        Some(cleaned) => {
            trace::record(trace, || TraceEvent::IngredientCleaned {
                raw: raw.to_string(),
                cleaned: cleaned.clone(),
            });
            items.push(cleaned);
        }
        None => trace::record(trace, || TraceEvent::IngredientDropped {
            raw: raw.to_string(),
        }),
    }
}

/// The cleaning rule applied to every accepted ingredient text.
pub(crate) fn clean_ingredient(raw: &str) -> Option<String> {
    if raw.contains("[Illustration:") {
        return None;
    }
    let mut line = ENUMERATION_RE.replace(raw.trim(), "").into_owned();
    line = LEADING_MIX_VERB_RE.replace(&line, "").into_owned();
    line = unwrap_emphasis(&line);
    // "¼ tsp. each cinnamon and nutmeg" reads as one quantity, not two.
    if line.contains("each") && line.contains(" and ") {
        line = line.replace(" and ", " ");
    }
    line = TSP_SALT_RE.replace_all(&line, "tsp. salt").into_owned();
    line = TRAILING_CLAUSE_RE.replace(&line, "").into_owned();
    if line.contains("if desired") {
        line = IF_DESIRED_RE.replace_all(&line, "").into_owned();
        line = format!("{}, if desired", line.trim());
    }
    if line.contains(',') {
        line = rebuild_comma_clauses(&line);
    }
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

fn rebuild_comma_clauses(line: &str) -> String {
    let mut parts = line.split(',');
    let mut main = parts.next().unwrap_or("").trim().to_string();
    let mut trailing: Vec<&str> = Vec::new();
    for part in parts {
        let part = part.trim();
        let lower = part.to_lowercase();
        if DESCRIPTIVE_ADJECTIVES.iter().any(|word| lower.contains(word)) {
            main.push(' ');
            main.push_str(part);
        } else if ALTERNATIVE_TOKENS.iter().any(|word| lower.contains(word))
            || lower.contains("if desired")
        {
            trailing.push(part);
        }
        // anything else is instruction debris and is dropped
    }
    if trailing.is_empty() {
        main
    } else {
        format!("{}, {}", main, trailing.join(", "))
    }
}
