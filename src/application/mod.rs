// Application layer - Ports and the dashboard workflow
pub mod dashboard_controller;
pub mod product_service;
pub mod session;
