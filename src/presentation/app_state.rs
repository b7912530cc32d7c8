// Application state shared by the command handlers
use crate::application::dashboard_controller::DashboardController;
use crate::application::product_service::ProductService;
use crate::application::session::{AuthGateway, SessionProvider};
use crate::presentation::terminal_session::TerminalSession;
use std::sync::Arc;

pub struct AppState {
    pub controller: DashboardController,
    pub products: Arc<dyn ProductService>,
    pub auth: Arc<dyn AuthGateway>,
    pub session: Arc<TerminalSession>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductService>,
        auth: Arc<dyn AuthGateway>,
        session: Arc<TerminalSession>,
    ) -> Self {
        let provider: Arc<dyn SessionProvider> = session.clone();
        Self {
            controller: DashboardController::new(products.clone(), provider),
            products,
            auth,
            session,
        }
    }
}
