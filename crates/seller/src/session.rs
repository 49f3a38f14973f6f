//! Session identity from the auth collaborator
//!
//! The auth layer owns a `SessionPublisher` and pushes the current
//! identity (or its absence) on every auth-state change. Flows hold a
//! `Session` and read `current()` before issuing seller-scoped calls,
//! or await `changed()` to react to sign-in/sign-out.

use agora_core::SellerId;
use log::debug;
use thiserror::Error;
use tokio::sync::watch;

/// The auth collaborator dropped its end of the session channel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("auth collaborator closed the session")]
pub struct SessionClosed;

/// Auth-side handle: publish identity changes
pub struct SessionPublisher {
    tx: watch::Sender<Option<SellerId>>,
}

impl SessionPublisher {
    /// Announce a signed-in user
    pub fn signed_in(&self, seller_id: SellerId) {
        debug!("session: signed in as {seller_id}");
        let _ = self.tx.send(Some(seller_id));
    }

    /// Announce sign-out
    pub fn signed_out(&self) {
        debug!("session: signed out");
        let _ = self.tx.send(None);
    }
}

/// Consumer-side handle: observe the current identity
#[derive(Clone)]
pub struct Session {
    rx: watch::Receiver<Option<SellerId>>,
}

impl Session {
    /// The identity as of now, or `None` when signed out
    pub fn current(&self) -> Option<SellerId> {
        self.rx.borrow().clone()
    }

    /// Wait for the next auth-state change and return the new identity
    pub async fn changed(&mut self) -> Result<Option<SellerId>, SessionClosed> {
        self.rx.changed().await.map_err(|_| SessionClosed)?;
        Ok(self.rx.borrow().clone())
    }
}

/// Create a connected publisher/session pair, starting signed out
pub fn session_pair() -> (SessionPublisher, Session) {
    let (tx, rx) = watch::channel(None);
    (SessionPublisher { tx }, Session { rx })
}
