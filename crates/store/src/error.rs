//! Store errors

use thiserror::Error;

/// Errors returned by store lookups and mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl StoreError {
    pub fn course_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "course",
            id: id.into(),
        }
    }
}

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
