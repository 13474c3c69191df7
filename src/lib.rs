//! Turns an OCR-derived cookbook corpus into structured recipe records.
//!
//! The input is one long plain-text document with all the scanning artifacts
//! that implies: inconsistent heading capitalization, `_underscore_` emphasis
//! from the italic transcription, `[Illustration: …]` tags, vulgar-fraction
//! glyphs, and cross-page references to shared sub-recipes. The pipeline cuts
//! it into per-recipe spans and extracts title, serving range, notes,
//! ingredients, and instructions from each span with deterministic heuristics.
//!
//! ```
//! use cookbook_extract::parse_cookbook;
//!
//! let corpus = "HUSH PUPPIES\n\nMix 1 cup corn meal, 1 tsp. salt, and 1 cup milk.\nServe hot. _Makes 15 to 20._\n";
//! let index = parse_cookbook(corpus);
//! let recipe = index.lookup("HUSH PUPPIES").unwrap();
//! assert_eq!(recipe.ingredients_text(), "1 cup corn meal\n1 tsp. salt\n1 cup milk");
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipeline;
pub mod scanner;
mod text;
pub mod trace;

pub use crate::config::PipelineConfig;
pub use error::ExtractError;
pub use model::{Recipe, RecipeIndex, ServingSize};
pub use pipeline::CookbookParser;
pub use trace::{MemorySink, TraceEvent, TraceSink};

/// Parse a corpus with the default configuration, returning the recipes in
/// corpus order.
pub fn parse_recipes(corpus: &str) -> Vec<Recipe> {
    CookbookParser::new().parse_recipes(corpus)
}

/// Parse a corpus with the default configuration and index the result by
/// title.
pub fn parse_cookbook(corpus: &str) -> RecipeIndex {
    CookbookParser::new().parse(corpus)
}
