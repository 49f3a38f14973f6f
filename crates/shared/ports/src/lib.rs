//! Agora Ports
//!
//! Port definitions (traits) for the Agora marketplace.
//! These define the boundaries between domain logic and infrastructure.

mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::DocumentStore;
