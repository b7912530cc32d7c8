// Dashboard controller - Owns the view state and reconciles it with the product service
use crate::application::product_service::ProductService;
use crate::application::session::{ConfirmationGate, SessionProvider};
use crate::domain::dashboard::{
    ADD_FAILED_MESSAGE, DELETE_FAILED_MESSAGE, DashboardViewState, Notification,
};
use crate::domain::draft::{AddProductDraft, DraftError};
use crate::domain::product::ProductId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure?";

/// Rejections that happen before any network call is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid product draft: {0}")]
    InvalidDraft(#[from] DraftError),
    #[error("product {0} is not on the dashboard")]
    UnknownProduct(ProductId),
}

/// What a mutating operation ended up doing. Failures are already reflected in the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Cancelled,
    Failed,
}

struct Inner {
    view: DashboardViewState,
    applied_ticket: u64,
}

/// One controller is constructed per dashboard activation. The product list it holds is
/// only ever replaced by a full snapshot from the service, never patched locally.
pub struct DashboardController {
    service: Arc<dyn ProductService>,
    session: Arc<dyn SessionProvider>,
    inner: Mutex<Inner>,
    issued_ticket: AtomicU64,
}

impl DashboardController {
    pub fn new(service: Arc<dyn ProductService>, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            service,
            session,
            inner: Mutex::new(Inner {
                view: DashboardViewState::default(),
                applied_ticket: 0,
            }),
            issued_ticket: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current view state
    pub fn view(&self) -> DashboardViewState {
        self.lock().view.clone()
    }

    /// Initial load. The view starts out in `Loading` until the first list completes.
    pub async fn activate(&self) {
        tracing::debug!("dashboard activated");
        self.refresh().await;
    }

    /// Re-fetch the full product list.
    ///
    /// Every call takes a ticket; a response is applied only when its ticket is newer than the
    /// last applied one, so a slow, older refresh can't overwrite a newer snapshot.
    pub async fn refresh(&self) {
        let ticket = self.issued_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(ticket, "requesting product list");

        let result = self.service.list_products().await;

        let mut inner = self.lock();
        if ticket <= inner.applied_ticket {
            tracing::debug!(
                ticket,
                applied = inner.applied_ticket,
                "dropping stale product list response"
            );
            return;
        }
        inner.applied_ticket = ticket;

        match result {
            Ok(products) => {
                tracing::debug!(ticket, count = products.len(), "product list applied");
                inner.view.snapshot_loaded(products);
            }
            Err(err) => {
                tracing::warn!(ticket, error = %err, "failed to load dashboard");
                inner.view.load_failed();
                drop(inner);
                if err.is_unauthorized() {
                    tracing::info!("session expired, redirecting to login");
                    self.session.redirect_to_login();
                }
            }
        }
    }

    /// Show or hide the add-product form. Drafts are kept either way.
    pub fn toggle_add_form(&self) -> bool {
        let mut inner = self.lock();
        inner.view.toggle_form();
        inner.view.form_open()
    }

    pub fn edit_draft_url(&self, url: &str) {
        self.lock().view.draft_mut().url = url.to_string();
    }

    pub fn edit_draft_target_price(&self, target_price: &str) {
        self.lock().view.draft_mut().target_price = target_price.to_string();
    }

    /// Submit whatever is currently in the form drafts.
    pub async fn submit_add_form(&self) -> Result<MutationOutcome, DashboardError> {
        let draft = self.lock().view.draft().clone();
        self.add_product(&draft.url, &draft.target_price).await
    }

    pub async fn add_product(
        &self,
        url_draft: &str,
        target_price_draft: &str,
    ) -> Result<MutationOutcome, DashboardError> {
        let draft = AddProductDraft::new(url_draft, target_price_draft);
        self.lock().view.set_draft(draft.clone());
        let product = draft.validate()?;

        match self.service.add_product(&product).await {
            Ok(()) => {
                tracing::info!(url = %product.url, "product added");
                self.lock().view.add_succeeded();
                self.refresh().await;
                Ok(MutationOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(url = %product.url, error = %err, "failed to add product");
                let message = err.server_message().unwrap_or(ADD_FAILED_MESSAGE).to_string();
                self.lock().view.notify(Notification::AddFailed(message));
                Ok(MutationOutcome::Failed)
            }
        }
    }

    pub async fn delete_product(
        &self,
        id: &ProductId,
        gate: &dyn ConfirmationGate,
    ) -> Result<MutationOutcome, DashboardError> {
        if !self.lock().view.contains(id) {
            return Err(DashboardError::UnknownProduct(id.clone()));
        }
        if !gate.confirm(DELETE_CONFIRM_PROMPT) {
            tracing::debug!(%id, "delete cancelled");
            return Ok(MutationOutcome::Cancelled);
        }

        match self.service.delete_product(id).await {
            Ok(()) => {
                tracing::info!(%id, "product deleted");
                self.refresh().await;
                Ok(MutationOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "failed to delete product");
                self.lock()
                    .view
                    .notify(Notification::DeleteFailed(DELETE_FAILED_MESSAGE.to_string()));
                Ok(MutationOutcome::Failed)
            }
        }
    }

    pub fn dismiss_notification(&self) -> Option<Notification> {
        self.lock().view.dismiss_notification()
    }
}
