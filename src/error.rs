use thiserror::Error;

/// Errors that can surface from the extraction pipeline and its collaborators.
///
/// Per-span parse failures (missing ingredients, unresolved serving size, …) are
/// deliberately not errors: they are recorded as empty fields on the Recipe so a
/// single bad span never aborts the batch.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Title lookup failed under every normalized quote variant
    #[error("no recipe found for title {0:?}")]
    RecipeNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Corpus file could not be read
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe records could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
