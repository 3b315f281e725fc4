use thiserror::Error;

/// Org module error type.
#[derive(Debug, Error)]
pub enum OrgError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("read-only: {0}")]
    ReadOnly(String),
}

impl From<OrgError> for openforge_core::ServiceError {
    fn from(e: OrgError) -> Self {
        match e {
            OrgError::NotFound(m) => openforge_core::ServiceError::NotFound(m),
            OrgError::Validation(m) => openforge_core::ServiceError::Validation(m),
            OrgError::ReadOnly(m) => openforge_core::ServiceError::ReadOnly(m),
        }
    }
}
