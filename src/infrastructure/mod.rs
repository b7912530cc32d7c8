// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_auth;
pub mod http_client;
pub mod http_product_service;
pub mod wire_mapper;
