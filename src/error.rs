//! Error types for stemma

use thiserror::Error;

use crate::model::PersonId;

/// Result type alias for stemma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stemma operations
///
/// The pure ops never fail; these are raised by the session layer, which
/// turns the engine's silent no-ops into diagnostics, and by snapshot
/// load/save.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No person with id {0}")]
    NotFound(PersonId),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Cannot delete the only remaining root")]
    LastRoot,
}
