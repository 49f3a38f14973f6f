//! Agora Core Domain
//!
//! Pure domain types for the Agora marketplace.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Category, CategoryFilter, ContactDetails, Product, ProductDraft, ProductForm, ValidationIssue,
};
pub use values::{Price, ProductId, SellerId, Timestamp};
