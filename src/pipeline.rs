//! The corpus → recipe pipeline.
//!
//! Scan titles, cut spans, run the four field extractors over every span, and
//! assemble the results. The whole pass is deterministic: the same corpus
//! always yields a bit-identical recipe list, with or without the parallel
//! path.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::extractors::{ingredients, instructions, notes, serving};
use crate::model::{Recipe, RecipeIndex};
use crate::scanner::{segment_spans, RecipeSpan, TitleScanner};
use crate::trace::{self, TraceEvent, TraceSink};

/// Configurable front end over the pipeline.
pub struct CookbookParser {
    config: PipelineConfig,
    trace: Option<Arc<dyn TraceSink>>,
}

impl CookbookParser {
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config, trace: None }
    }

    /// Attach a trace sink. Tracing is off otherwise.
    pub fn with_trace(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Parse the corpus and index the result by title.
    pub fn parse(&self, corpus: &str) -> RecipeIndex {
        RecipeIndex::from_recipes(self.parse_recipes(corpus))
    }

    /// Parse the corpus into recipe records, in corpus order.
    pub fn parse_recipes(&self, corpus: &str) -> Vec<Recipe> {
        let trace = self.trace.as_deref();
        let scanner = TitleScanner::new(&self.config.skip_titles);
        let matches = scanner.scan(corpus, trace);
        let spans = segment_spans(corpus, &matches, trace);
        debug!("segmented {} recipe spans", spans.len());

        // Spans carry no cross-recipe state, so the parallel path only needs
        // the ordered collect at the end.
        let recipes: Vec<Recipe> = if self.config.parallel {
            spans.par_iter().map(|span| self.assemble(span)).collect()
        } else {
            spans.iter().map(|span| self.assemble(span)).collect()
        };
        debug!("parsed {} recipes", recipes.len());
        recipes
    }

    /// Merge the four extractors' outputs for one span into a Recipe.
    fn assemble(&self, span: &RecipeSpan) -> Recipe {
        let trace = self.trace.as_deref();

        let serving_size = serving::parse_serving_size(&span.body);
        if serving_size.is_unresolved() {
            trace::record(trace, || TraceEvent::ServingSizeUnresolved {
                title: span.title.clone(),
            });
        }

        let notes = notes::extract_notes(&span.body);
        let ingredients = ingredients::extract_ingredients(&span.body, trace);
        if ingredients.is_empty() {
            debug!("no ingredients found for {:?}", span.title);
            trace::record(trace, || TraceEvent::EmptyIngredients {
                title: span.title.clone(),
            });
        }

        let instructions = instructions::extract_instructions(&span.body);
        if instructions.is_empty() {
            debug!("no instructions found for {:?}", span.title);
            trace::record(trace, || TraceEvent::EmptyInstructions {
                title: span.title.clone(),
            });
        }

        Recipe {
            title: span.title.clone(),
            serving_size,
            notes,
            ingredients,
            instructions,
        }
    }
}

impl Default for CookbookParser {
    fn default() -> Self {
        Self::new()
    }
}
