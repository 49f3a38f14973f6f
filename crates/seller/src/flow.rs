//! Seller Mutation Flow - one state machine per form submission
//!
//! Validation runs entirely client-side and short-circuits before any
//! network call. A successful write always triggers a full seller-scoped
//! cache reload through the handle the caller passes in; the flow never
//! patches the cache locally.

use std::sync::Arc;

use agora_core::{ProductForm, ProductId, SellerId, ValidationIssue};
use agora_gateway::{GatewayError, ProductGateway};
use agora_listings::{ListingCache, SnapshotSource};
use log::{info, warn};

use crate::session::Session;

/// Where a submission currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    /// Human-readable reason; the user may retry from `Idle`
    Failed(String),
}

impl FlowState {
    pub fn is_failed(&self) -> bool {
        matches!(self, FlowState::Failed(_))
    }
}

/// Orchestrates seller writes through the gateway
///
/// Holds the gateway and session handles; the listing cache is passed
/// into each operation explicitly so refreshes are visible at the call
/// site rather than happening through shared ambient state.
pub struct MutationFlow {
    gateway: Arc<ProductGateway>,
    session: Session,
    state: FlowState,
    in_flight: bool,
}

impl MutationFlow {
    pub fn new(gateway: Arc<ProductGateway>, session: Session) -> Self {
        Self {
            gateway,
            session,
            state: FlowState::Idle,
            in_flight: false,
        }
    }

    /// Current state of the last submission
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Return to `Idle` so the user can retry after a failure
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
    }

    /// Validate and submit a new listing
    ///
    /// `on_success` runs after the write lands and the cache has been
    /// refreshed (typically: close the form).
    pub async fn submit_create<F: FnOnce()>(
        &mut self,
        cache: &mut ListingCache,
        form: &ProductForm,
        on_success: F,
    ) -> &FlowState {
        if !self.begin() {
            return &self.state;
        }
        let Some(seller_id) = self.validate_session() else {
            return &self.state;
        };
        let draft = match form.validate(&seller_id) {
            Ok(draft) => draft,
            Err(issues) => return self.fail_validation(issues),
        };

        self.state = FlowState::Submitting;
        self.in_flight = true;
        let result = self.gateway.create(draft).await;
        self.in_flight = false;

        match result {
            Ok(id) => {
                info!("flow: created {id}");
                self.succeed(cache, seller_id, on_success).await
            }
            Err(e) => self.fail_gateway("list the product", e),
        }
    }

    /// Validate and overwrite an existing listing
    pub async fn submit_update<F: FnOnce()>(
        &mut self,
        cache: &mut ListingCache,
        id: &ProductId,
        form: &ProductForm,
        on_success: F,
    ) -> &FlowState {
        if !self.begin() {
            return &self.state;
        }
        let Some(seller_id) = self.validate_session() else {
            return &self.state;
        };
        let draft = match form.validate(&seller_id) {
            Ok(draft) => draft,
            Err(issues) => return self.fail_validation(issues),
        };

        self.state = FlowState::Submitting;
        self.in_flight = true;
        let result = self.gateway.update(id, draft).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!("flow: updated {id}");
                self.succeed(cache, seller_id, on_success).await
            }
            Err(e) => self.fail_gateway("save the changes", e),
        }
    }

    /// Start a delete; nothing is submitted until `confirm()`
    pub fn request_delete(&mut self, id: ProductId) -> DeleteConfirmation<'_> {
        DeleteConfirmation { flow: self, id }
    }

    /// Entry guard: reject re-submission while a call is in flight
    fn begin(&mut self) -> bool {
        if self.in_flight {
            warn!("flow: submission rejected, another call is in flight");
            return false;
        }
        self.state = FlowState::Validating;
        true
    }

    fn validate_session(&mut self) -> Option<SellerId> {
        match self.session.current() {
            Some(seller_id) => Some(seller_id),
            None => {
                self.state =
                    FlowState::Failed("Please log in to manage your listings.".to_string());
                None
            }
        }
    }

    fn fail_validation(&mut self, issues: Vec<ValidationIssue>) -> &FlowState {
        let reasons = issues
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        self.state = FlowState::Failed(reasons);
        &self.state
    }

    fn fail_gateway(&mut self, action: &str, error: GatewayError) -> &FlowState {
        warn!("flow: gateway failure: {error}");
        let message = match error {
            GatewayError::RemoteUnavailable(_) => {
                format!("Failed to {action}. Please try again.")
            }
            GatewayError::NotFound(_) => "This listing no longer exists.".to_string(),
            GatewayError::ValidationRejected(reason) => {
                format!("The store rejected this listing: {reason}")
            }
        };
        self.state = FlowState::Failed(message);
        &self.state
    }

    /// Mutation landed: refresh the seller's snapshot, then notify
    ///
    /// A failed refresh does not undo the success; the write is already
    /// in the store and the next load will catch up.
    async fn succeed<F: FnOnce()>(
        &mut self,
        cache: &mut ListingCache,
        seller_id: SellerId,
        on_success: F,
    ) -> &FlowState {
        if let Err(e) = cache
            .load(&self.gateway, SnapshotSource::BySeller(seller_id))
            .await
        {
            warn!("flow: refresh after mutation failed, snapshot is stale: {e}");
        }
        self.state = FlowState::Succeeded;
        on_success();
        &self.state
    }
}

/// Pending delete awaiting user confirmation
///
/// The confirmation step belongs to the same flow: `confirm()` performs
/// the delete and the refresh, `cancel()` walks away without a call.
pub struct DeleteConfirmation<'a> {
    flow: &'a mut MutationFlow,
    id: ProductId,
}

impl DeleteConfirmation<'_> {
    /// The listing this would delete
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// User confirmed: submit the delete
    pub async fn confirm<F: FnOnce()>(
        self,
        cache: &mut ListingCache,
        on_success: F,
    ) -> FlowState {
        let flow = self.flow;
        if !flow.begin() {
            return flow.state.clone();
        }
        let Some(seller_id) = flow.validate_session() else {
            return flow.state.clone();
        };

        flow.state = FlowState::Submitting;
        flow.in_flight = true;
        let result = flow.gateway.delete(&self.id).await;
        flow.in_flight = false;

        match result {
            Ok(()) => {
                info!("flow: deleted {}", self.id);
                flow.succeed(cache, seller_id, on_success).await.clone()
            }
            Err(e) => flow.fail_gateway("delete the listing", e).clone(),
        }
    }

    /// User backed out: no call is made and the flow stays where it was
    pub fn cancel(self) {
        info!("flow: delete of {} cancelled", self.id);
    }
}
