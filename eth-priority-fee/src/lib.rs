// Export modules for the binary and the integration tests
pub mod api;
pub mod config;
pub mod error;
pub mod estimator;
pub mod fees;
pub mod models;
pub mod page;
pub mod rpc;
