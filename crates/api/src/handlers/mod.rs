//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `cinedex_db` and
//! map errors via [`AppError`](crate::error::AppError).

use std::collections::HashMap;

use cinedex_core::types::DbId;

pub mod character;
pub mod franchise;
pub mod movie;

/// Group `(owner_id, related_id)` pairs into a per-owner id list.
///
/// Used to flatten relation rows fetched in bulk into the id lists the
/// read DTOs carry. Pair order within an owner is preserved.
pub(crate) fn group_pairs(pairs: Vec<(DbId, DbId)>) -> HashMap<DbId, Vec<DbId>> {
    let mut grouped: HashMap<DbId, Vec<DbId>> = HashMap::new();
    for (owner, related) in pairs {
        grouped.entry(owner).or_default().push(related);
    }
    grouped
}
