// Domain layer - Tracked products, form drafts and dashboard view state
pub mod dashboard;
pub mod draft;
pub mod price_history;
pub mod product;
