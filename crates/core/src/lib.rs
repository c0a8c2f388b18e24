//! Shared domain primitives for the cinedex workspace.
//!
//! Holds the types and error taxonomy used by both the database layer
//! (`cinedex-db`) and the HTTP layer (`cinedex-api`).

pub mod error;
pub mod types;
