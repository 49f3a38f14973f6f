//! Store Simulator
//!
//! In-memory stand-in for the hosted document store backing the
//! products collection. Behaves like the real thing at the
//! `DocumentStore` port: store-minted ids, server-assigned creation
//! timestamps, insertion-incidental ordering, full-overwrite replace.
//!
//! Test hooks on top of the port:
//! - `set_offline(true)` makes every call fail with `RemoteUnavailable`
//! - `write_calls()` counts mutating calls that reached the store, so
//!   tests can prove client-side validation short-circuits
//! - `seed` inserts fixtures without touching the call counters

mod memory_store;

pub use memory_store::MemoryStore;
