//! Optional structured tracing for the pipeline.
//!
//! The pipeline is a pure function of its input; nothing is emitted unless a
//! sink is injected. Events cover the decisions that are otherwise invisible
//! from the outside: which headings were rejected, how ingredient lines were
//! rewritten, and which spans came out with empty fields.

use std::sync::Mutex;

/// A single pipeline decision worth observing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A heading matched but was rejected outright (no span boundary)
    TitleRejected { text: String },
    /// A section divider matched; it bounds spans but yields no recipe
    SectionSkipped { title: String },
    /// An accepted ingredient line, before and after the cleaning rule
    IngredientCleaned { raw: String, cleaned: String },
    /// An accepted ingredient line that cleaned down to nothing
    IngredientDropped { raw: String },
    /// A recipe span produced no ingredient lines
    EmptyIngredients { title: String },
    /// A recipe span produced no instruction stream
    EmptyInstructions { title: String },
    /// No serving-size rule matched; the recipe defaults to (0,0)
    ServingSizeUnresolved { title: String },
}

/// Receiver for [`TraceEvent`]s. Implementations must tolerate concurrent
/// recording when the pipeline runs its parallel path.
pub trait TraceSink: Send + Sync {
    fn record(&self, event: TraceEvent);
}

/// Sink that buffers events in memory, mainly for tests and offline debugging.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<TraceEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().expect("trace sink poisoned").clone()
    }
}

impl TraceSink for MemorySink {
    fn record(&self, event: TraceEvent) {
        self.events.lock().expect("trace sink poisoned").push(event);
    }
}

/// Record an event if a sink is attached.
pub(crate) fn record(sink: Option<&dyn TraceSink>, event: impl FnOnce() -> TraceEvent) {
    if let Some(sink) = sink {
        sink.record(event());
    }
}
