//! Entity models and transfer DTOs.
//!
//! Each module holds one entity: the row struct, the `Create*`/`Update*`
//! request DTOs, and the `*Read` response projection that flattens the
//! entity's relationships into id lists.

pub mod character;
pub mod franchise;
pub mod movie;
