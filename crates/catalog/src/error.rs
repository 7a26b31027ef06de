use cinedex_core::error::CoreError;

/// Failure of a catalog operation.
///
/// Domain rejections arrive as [`CoreError`]; storage failures are passed
/// through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
