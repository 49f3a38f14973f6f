use agora_core::ProductId;
use thiserror::Error;

/// Failures surfaced by the hosted document store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Network or backend failure; recoverable by user retry
    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    /// The referenced document no longer exists
    #[error("Document not found: {0}")]
    NotFound(ProductId),

    /// The backend rejected the write against its own schema rules
    #[error("Write rejected by store: {0}")]
    ValidationRejected(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
