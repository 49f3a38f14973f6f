//! Agora Seller
//!
//! Seller-side mutation flow for the marketplace. Orchestrates
//! create/update/delete calls through the gateway and keeps the
//! seller's listing cache in step by re-fetching after every
//! successful write.
//!
//! ## State machine
//!
//! ```text
//! Idle ──► Validating ──► Submitting ──► Succeeded
//!              │               │
//!              └──► Failed ◄───┘
//! ```
//!
//! Validation failures (missing fields, contact-presence invariant,
//! signed-out session) never reach the network. While a submission is
//! in flight, further submissions are rejected. There are no automatic
//! retries: every failure waits for the user to act again.

pub mod flow;
pub mod session;

// Re-export main types
pub use flow::{DeleteConfirmation, FlowState, MutationFlow};
pub use session::{Session, SessionClosed, SessionPublisher, session_pair};
