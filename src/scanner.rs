//! Title scanning and span segmentation.
//!
//! A recipe heading in the corpus is an all-caps line (OCR keeps accented
//! capitals), sometimes wrapped in an `[Illustration: …]` tag or quote glyphs.
//! The scanner walks the corpus left to right and turns every accepted heading
//! into a span boundary; the segmenter then cuts the text between consecutive
//! boundaries into per-recipe spans.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::text::strip_quotes;
use crate::trace::{self, TraceEvent, TraceSink};

lazy_static! {
    /// Maximal run of uppercase letters (accented Latin forms included),
    /// spaces, hyphens, commas and quote glyphs, optionally inside an
    /// illustration tag or a leading quote, terminated by a newline or the end
    /// of the corpus.
    static ref HEADING_RE: Regex = Regex::new(
        r#"(?:\[Illustration:\s*)?["“”‘’]?([A-ZÉÈÊËÀÂÄÇÎÏÔÖÙÛÜŸÆŒ][A-ZÉÈÊËÀÂÄÇÎÏÔÖÙÛÜŸÆŒ ,"“”‘’-]+)["“”‘’\]]?(?:\n|\z)"#
    )
    .unwrap();
}

/// Section headings that bound spans without starting a recipe: the corpus
/// category dividers plus its front-matter labels.
pub const DEFAULT_SKIP_TITLES: &[&str] = &[
    "BREADS",
    "CAKES",
    "COOKIES",
    "DESSERTS",
    "MAIN DISHES",
    "SAUCES AND GRAVIES",
    "MENUS",
    "INDEX",
    "HOW TO MAKE GOOD BISCUITS",
    "SUNDAY BRUNCH",
    "FAVORITE LUNCH",
];

/// One accepted heading boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    /// Normalized title: trimmed, surrounding quote glyphs stripped
    pub title: String,
    /// Byte offset where the heading match starts
    pub start: usize,
    /// Byte offset just past the heading line
    pub end: usize,
    /// Section divider: bounds spans but yields no recipe
    pub is_section: bool,
}

/// Scans the corpus for recipe-title boundaries.
#[derive(Debug)]
pub struct TitleScanner {
    skip_titles: HashSet<String>,
}

impl TitleScanner {
    pub fn new(skip_titles: &[String]) -> Self {
        Self {
            skip_titles: skip_titles.iter().cloned().collect(),
        }
    }

    /// All heading boundaries in corpus order, non-overlapping.
    ///
    /// Headings whose text starts with `"Step "` or `"INDEX"` are page
    /// furniture, not boundaries: the scan just moves past them. Skip-title
    /// headings stay boundaries (so divider text never leaks into the
    /// preceding span) but are flagged so the segmenter drops their spans.
    pub fn scan(&self, corpus: &str, trace: Option<&dyn TraceSink>) -> Vec<TitleMatch> {
        let mut matches = Vec::new();
        for captures in HEADING_RE.captures_iter(corpus) {
            let whole = captures.get(0).expect("match without group 0");
            let raw = captures.get(1).expect("heading without capture").as_str();
            let title = strip_quotes(raw).to_string();

            if title.starts_with("Step ") || title.starts_with("INDEX") {
                debug!("rejected heading {:?}", title);
                trace::record(trace, || TraceEvent::TitleRejected { text: title.clone() });
                continue;
            }

            let is_section = self.skip_titles.contains(&title);
            matches.push(TitleMatch {
                title,
                start: whole.start(),
                end: whole.end(),
                is_section,
            });
        }
        matches
    }
}

/// The text belonging to one recipe: its title plus everything up to the next
/// heading boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSpan {
    pub title: String,
    pub body: String,
}

/// Cut the corpus into per-recipe spans, in corpus order.
///
/// Section-divider boundaries yield no span; text before the first boundary
/// has no recognizable title and is dropped.
pub fn segment_spans(
    corpus: &str,
    matches: &[TitleMatch],
    trace: Option<&dyn TraceSink>,
) -> Vec<RecipeSpan> {
    let mut spans = Vec::new();
    for (position, title_match) in matches.iter().enumerate() {
        if title_match.is_section {
            debug!("skipping section heading {:?}", title_match.title);
            trace::record(trace, || TraceEvent::SectionSkipped {
                title: title_match.title.clone(),
            });
            continue;
        }
        let end = matches
            .get(position + 1)
            .map_or(corpus.len(), |next| next.start);
        spans.push(RecipeSpan {
            title: title_match.title.clone(),
            body: corpus[title_match.end..end].trim().to_string(),
        });
    }
    spans
}
