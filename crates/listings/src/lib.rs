//! Agora Listings
//!
//! Client-side listing state for the marketplace:
//!
//! - **Listing Cache**: the most recent full or seller-scoped snapshot
//!   of the products collection, discarded and re-fetched wholesale
//!   after every mutation
//! - **Filter/Search View**: a pure derivation of the display list from
//!   the snapshot, a category selector, and a free-text query
//!
//! ## Data flow
//!
//! ```text
//! Gateway read ──► ListingCache ──► derive(snapshot, category, term)
//!                                          │
//!                                          ▼
//!                                    display list
//! ```

pub mod cache;
pub mod filter;

// Re-export main types
pub use cache::{ListingCache, SnapshotSource};
pub use filter::derive;
