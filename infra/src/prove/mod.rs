//! Prove Identity Provider Module
//!
//! This module implements the gateway's `IdentityProvider` against the
//! Prove platform API.
//!
//! ## Features
//!
//! - Environment-selected base URL with a `DEVICE_API_BASE_URL` override
//! - OAuth2 client-credentials token per call (no cross-request state)
//! - Credentials checked lazily, so a misconfigured process still serves
//!   validation errors and reports the missing variables per request
//! - Vendor error bodies mapped to their `message`

mod client;
mod config;
mod models;


pub use client::ProveClient;
pub use config::{Credentials, ProveConfig, ProveEnvironment};
