// Terminal command handlers
use crate::application::dashboard_controller::MutationOutcome;
use crate::application::session::{ConfirmationGate, SessionProvider};
use crate::domain::product::ProductId;
use crate::presentation::app_state::AppState;
use crate::presentation::commands::{Command, HELP};
use crate::presentation::render::{render_dashboard, render_history};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub async fn handle_command(
    state: &AppState,
    command: Command,
    gate: &dyn ConfirmationGate,
) -> Flow {
    let controller = &state.controller;

    let output = match command {
        Command::Quit => return Flow::Quit,
        Command::Help => HELP.to_string(),
        Command::Refresh => {
            controller.refresh().await;
            dashboard(state)
        }
        Command::ToggleForm => {
            controller.toggle_add_form();
            dashboard(state)
        }
        Command::DraftUrl(url) => {
            controller.edit_draft_url(&url);
            dashboard(state)
        }
        Command::DraftPrice(price) => {
            controller.edit_draft_target_price(&price);
            dashboard(state)
        }
        Command::Submit => {
            if !controller.view().form_open() {
                return Flow::Continue("Open the form with 'add' first.".to_string());
            }
            match controller.submit_add_form().await {
                Ok(outcome) => after_mutation(state, outcome),
                Err(e) => format!("Cannot add product: {}", e),
            }
        }
        Command::Delete(id) => {
            match controller.delete_product(&ProductId::new(id), gate).await {
                Ok(outcome) => after_mutation(state, outcome),
                Err(e) => e.to_string(),
            }
        }
        Command::History(id) => match state.products.price_history(&ProductId::new(id)).await {
            Ok(history) => render_history(&history),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch price history");
                "Failed to load price history".to_string()
            }
        },
        Command::Dismiss => {
            controller.dismiss_notification();
            dashboard(state)
        }
        Command::Login { username, password } => {
            match state.auth.login(&username, &password).await {
                Ok(()) => {
                    controller.refresh().await;
                    dashboard(state)
                }
                Err(e) => format!("Login failed: {}", e),
            }
        }
        Command::Register {
            username,
            email,
            password,
        } => match state.auth.register(&username, &email, &password).await {
            Ok(()) => "Registered. Log in with 'login <username> <password>'.".to_string(),
            Err(e) => format!("Registration failed: {}", e),
        },
        Command::Logout => {
            state.session.redirect_to_login();
            "Logged out.".to_string()
        }
    };
    Flow::Continue(output)
}

fn dashboard(state: &AppState) -> String {
    render_dashboard(&state.controller.view())
}

/// Failed mutations raise a blocking notification that is shown ahead of the dashboard.
fn after_mutation(state: &AppState, outcome: MutationOutcome) -> String {
    match outcome {
        MutationOutcome::Failed => match state.controller.dismiss_notification() {
            Some(notification) => format!("{}\n\n{}", notification.message(), dashboard(state)),
            None => dashboard(state),
        },
        MutationOutcome::Cancelled => "Cancelled.".to_string(),
        MutationOutcome::Applied => dashboard(state),
    }
}
