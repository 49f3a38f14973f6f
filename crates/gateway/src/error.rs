//! Error types for the gateway crate

use agora_core::ProductId;
use agora_ports::StoreError;
use thiserror::Error;

/// Gateway-level errors
///
/// Mirrors the store taxonomy one layer up so callers never depend on
/// the store port directly. `NotFound` is an error only for operations
/// that require the document to exist (update); point lookups report
/// absence as `Ok(None)` and deletes treat it as success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Remote unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Validation rejected: {0}")]
    ValidationRejected(String),
}

impl From<StoreError> for GatewayError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RemoteUnavailable(msg) => GatewayError::RemoteUnavailable(msg),
            StoreError::NotFound(id) => GatewayError::NotFound(id),
            StoreError::ValidationRejected(msg) => GatewayError::ValidationRejected(msg),
        }
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
