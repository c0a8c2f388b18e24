//! Franchise entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A franchise row from the `franchises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Franchise {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new franchise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFranchise {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 50))]
    pub description: Option<String>,
}

/// DTO for a full update of an existing franchise.
///
/// Carries `id` so handlers can reject a path/body mismatch. All scalar
/// fields are replaced; there is no partial patch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFranchise {
    pub id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 50))]
    pub description: Option<String>,
}

/// Response projection: the franchise with its movie relation flattened
/// into a list of movie ids.
#[derive(Debug, Clone, Serialize)]
pub struct FranchiseRead {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub movies: Vec<DbId>,
}

impl FranchiseRead {
    pub fn from_entity(franchise: Franchise, movies: Vec<DbId>) -> Self {
        Self {
            id: franchise.id,
            name: franchise.name,
            description: franchise.description,
            movies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_franchise_rejects_overlong_name() {
        let input = CreateFranchise {
            name: "x".repeat(51),
            description: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_franchise_accepts_boundary_lengths() {
        let input = CreateFranchise {
            name: "x".repeat(50),
            description: Some("y".repeat(50)),
        };
        assert!(input.validate().is_ok());
    }
}
