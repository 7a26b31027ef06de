use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    InvalidRequest(String),
}
