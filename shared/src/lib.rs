//! Shared utilities and common types for the Unify Gateway
//!
//! This crate provides common functionality used across all gateway crates:
//! - Configuration types (server, CORS, environment)
//! - The error envelope returned by every failing endpoint
//! - Utility functions (phone masking for logs)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, Environment, ServerConfig};
pub use types::ErrorEnvelope;
pub use utils::phone;
