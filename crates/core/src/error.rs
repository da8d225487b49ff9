//! Error types for inventory extraction and rendering

use thiserror::Error;

/// Errors that can occur while turning a state document into a report
#[derive(Debug, Error)]
pub enum Error {
    /// The document has no `values.root_module` object
    #[error("Input has no values.root_module")]
    MissingRootModule,

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
