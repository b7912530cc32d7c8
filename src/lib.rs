// Price tracker client - dashboard synchronization over the tracker backend
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
