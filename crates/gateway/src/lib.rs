//! Agora Gateway
//!
//! Remote collection gateway for the Agora marketplace. Wraps CRUD
//! operations against the single logical "products" collection and is
//! the only component permitted to issue remote calls.
//!
//! ## Architecture
//!
//! ```text
//! Hosted Store (document DB, store-sim)
//!         │
//!    ┌────▼────────┐
//!    │DocumentStore│  opaque client-library port
//!    └────┬────────┘
//!         │
//!    ┌────▼────────┐
//!    │  Product    │  fetch_all / fetch_by_seller / fetch_one
//!    │  Gateway    │  create / update / delete
//!    └────┬────────┘
//!         │
//!    Listing Cache, Seller Mutation Flow
//! ```
//!
//! `fetch_all` makes no ordering promise: the store's order is passed
//! through untouched and callers must not treat it as a contract.

pub mod error;
pub mod product_gateway;

// Re-export commonly used types
pub use error::{GatewayError, GatewayResult};
pub use product_gateway::ProductGateway;
