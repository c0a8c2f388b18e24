//! Domain error taxonomy.
//!
//! Every failure the HTTP layer can report maps onto one of these
//! variants; the api crate converts them to status codes at the boundary.

use crate::types::DbId;

/// Domain-level errors shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unclassified internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
