// Main entry point - Dependency injection and the terminal loop
use std::sync::Arc;

use clap::Parser;
use price_tracker::infrastructure::config::load_client_config;
use price_tracker::infrastructure::http_auth::HttpAuthGateway;
use price_tracker::infrastructure::http_client::build_client;
use price_tracker::infrastructure::http_product_service::HttpProductService;
use price_tracker::presentation::app_state::AppState;
use price_tracker::presentation::commands::parse_command;
use price_tracker::presentation::handlers::{Flow, handle_command};
use price_tracker::presentation::render::render_dashboard;
use price_tracker::presentation::terminal_session::{
    TerminalConfirmation, TerminalInput, TerminalSession,
};
use tracing_subscriber::EnvFilter;

const LOGIN_HINT: &str = "Please log in: login <username> <password> (or register <username> <email> <password>)";

#[derive(Parser)]
#[command(author, version, about = "Track product prices from the terminal")]
struct Cli {
    /// Configuration file, without extension
    #[arg(short, long, default_value = "config/client")]
    config: String,
    /// Overrides the configured backend address
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they don't interleave with the dashboard
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = load_client_config(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
    }
    tracing::info!(base_url = %config.server.base_url, "starting price tracker client");

    // One client so the login cookie is shared by every call
    let client = build_client(&config.server)?;
    let products = Arc::new(HttpProductService::new(
        client.clone(),
        &config.server.base_url,
    ));
    let auth = Arc::new(HttpAuthGateway::new(client, &config.server.base_url));
    let session = Arc::new(TerminalSession::default());

    let state = AppState::new(products, auth, session);
    let input = TerminalInput::stdin();
    let gate = TerminalConfirmation::new(input.clone());

    println!("{}", render_dashboard(&state.controller.view()));
    state.controller.activate().await;
    println!("{}", render_dashboard(&state.controller.view()));

    loop {
        if state.session.take_login_request() {
            println!("{}", LOGIN_HINT);
        }

        let Some(line) = input.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match handle_command(&state, command, &gate).await {
            Flow::Continue(output) => println!("{}", output),
            Flow::Quit => break,
        }
    }

    Ok(())
}
