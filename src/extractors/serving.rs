//! Serving-size extraction.
//!
//! The corpus states yields a dozen different ways ("Makes 15 to 20.",
//! "_Makes about 12 doughnuts._", "makes 2½ doz.", "8 servings."). Extraction
//! is an ordered rule table evaluated top to bottom, first match wins. Order
//! carries meaning: dozen rules run strictly before plain-count rules so the
//! ×12 conversion is never shadowed, and multi-number variants run before
//! single-number variants of the same phrasing so "Makes 10 to 12" cannot
//! collapse to `(10, 10)`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::model::ServingSize;

/// How many counts a rule captures.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Single,
    Range,
}

/// How a captured count converts to a unit count.
#[derive(Debug, Clone, Copy)]
enum Scale {
    Units,
    Dozens,
}

struct SizeRule {
    pattern: Regex,
    arity: Arity,
    scale: Scale,
}

impl SizeRule {
    fn units(pattern: &str, arity: Arity) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            arity,
            scale: Scale::Units,
        }
    }

    fn dozens(pattern: &str, arity: Arity) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            arity,
            scale: Scale::Dozens,
        }
    }

    fn apply(&self, text: &str) -> Option<ServingSize> {
        let captures = self.pattern.captures(text)?;
        Some(match (self.arity, self.scale) {
            (Arity::Range, Scale::Dozens) => ServingSize(
                dozen_count(&captures, 1, 2),
                dozen_count(&captures, 3, 4),
            ),
            (Arity::Single, Scale::Dozens) => {
                let count = dozen_count(&captures, 1, 2);
                ServingSize(count, count)
            }
            (Arity::Range, Scale::Units) => {
                ServingSize(unit_count(&captures, 1), unit_count(&captures, 2))
            }
            (Arity::Single, Scale::Units) => {
                let count = unit_count(&captures, 1);
                ServingSize(count, count)
            }
        })
    }
}

/// Digits plus an optional vulgar-fraction glyph, dozen-converted and
/// truncated: "1½ doz" → 18.
fn dozen_count(captures: &Captures<'_>, digits: usize, glyph: usize) -> u32 {
    let mut count: f64 = captures
        .get(digits)
        .map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0));
    count += match captures.get(glyph).map(|m| m.as_str()) {
        Some("½") => 0.5,
        Some("¾") => 0.75,
        _ => 0.0,
    };
    (count * 12.0) as u32
}

fn unit_count(captures: &Captures<'_>, group: usize) -> u32 {
    captures
        .get(group)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0))
}

lazy_static! {
    static ref RULES: Vec<SizeRule> = vec![
        // Dozen phrasings first.
        SizeRule::dozens(
            r"(?i)makes\s+(\d+)\s*([½¾])?\s*to\s*(\d+)\s*([½¾])?\s*doz",
            Arity::Range,
        ),
        SizeRule::dozens(r"(?i)makes\s+(\d+)\s*([½¾])?\s*doz", Arity::Single),
        // Plain ranges before plain single counts.
        SizeRule::units(r"(?i)makes\s+(\d+)\s+to\s+(\d+)\s+servings", Arity::Range),
        SizeRule::units(r"(?i)_makes\s+(?:about\s+)?(\d+)\s+to\s+(\d+)_", Arity::Range),
        SizeRule::units(r"(?i)(\d+)\s+to\s+(\d+)\s+servings", Arity::Range),
        SizeRule::units(r"(?i)makes\s+(?:about\s+)?(\d+)\s+to\s+(\d+)", Arity::Range),
        SizeRule::units(r"(?i)_makes\s+(?:about\s+)?(\d+)_", Arity::Single),
        SizeRule::units(r"(?i)makes\s+(?:about\s+)?(\d+)", Arity::Single),
        SizeRule::units(r"(?i)about\s+(\d+)\s+servings", Arity::Single),
        SizeRule::units(r"(?i)(\d+)\s+servings", Arity::Single),
    ];
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Extract the serving/yield range from a recipe span. `(0, 0)` when nothing
/// matches.
pub fn parse_serving_size(text: &str) -> ServingSize {
    for rule in RULES.iter() {
        if let Some(size) = rule.apply(text) {
            return size;
        }
    }

    // Last resort: a line ending "servings." carries its count somewhere
    // earlier on the line.
    for line in text.lines() {
        if line.trim().ends_with("servings.") {
            if let Some(digits) = DIGITS_RE.find(line) {
                let count = digits.as_str().parse().unwrap_or(0);
                return ServingSize(count, count);
            }
        }
    }

    ServingSize(0, 0)
}
