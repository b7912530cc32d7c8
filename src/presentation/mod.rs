// Presentation layer - Terminal front end for the dashboard
pub mod app_state;
pub mod commands;
pub mod handlers;
pub mod render;
pub mod terminal_session;
