//! Genre model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genres` table.
///
/// Names are not unique; two genres may share a name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
