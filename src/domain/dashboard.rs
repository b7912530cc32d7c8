// Dashboard view state - client-only, owned by the dashboard controller
use super::draft::AddProductDraft;
use super::product::{ProductId, TrackedProduct};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add product";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

/// Blocking message raised by a failed mutation. The view shows it until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    AddFailed(String),
    DeleteFailed(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::AddFailed(message) | Notification::DeleteFailed(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewState {
    phase: Phase,
    products: Vec<TrackedProduct>,
    error_message: Option<String>,
    form_open: bool,
    draft: AddProductDraft,
    notification: Option<Notification>,
}

impl Default for DashboardViewState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            products: Vec::new(),
            error_message: None,
            form_open: false,
            draft: AddProductDraft::default(),
            notification: None,
        }
    }
}

impl DashboardViewState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last snapshot received from the product service.
    pub fn products(&self) -> &[TrackedProduct] {
        &self.products
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn draft(&self) -> &AddProductDraft {
        &self.draft
    }

    pub fn draft_url(&self) -> &str {
        &self.draft.url
    }

    pub fn draft_target_price(&self) -> &str {
        &self.draft.target_price
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    pub fn is_empty_ready(&self) -> bool {
        self.phase == Phase::Ready && self.products.is_empty()
    }

    // Transitions. Only the dashboard controller calls these.

    pub(crate) fn snapshot_loaded(&mut self, products: Vec<TrackedProduct>) {
        self.products = products;
        self.phase = Phase::Ready;
        self.error_message = None;
    }

    pub(crate) fn load_failed(&mut self) {
        self.phase = Phase::Failed;
        self.error_message = Some(LOAD_FAILED_MESSAGE.to_string());
    }

    pub(crate) fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    pub(crate) fn set_draft(&mut self, draft: AddProductDraft) {
        self.draft = draft;
    }

    pub(crate) fn draft_mut(&mut self) -> &mut AddProductDraft {
        &mut self.draft
    }

    pub(crate) fn add_succeeded(&mut self) {
        self.draft.clear();
        self.form_open = false;
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub(crate) fn dismiss_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }
}
