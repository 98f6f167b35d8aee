//! Verification service module for phone possession checks
//!
//! This module provides the dispatch path shared by every endpoint variant:
//! - The `IdentityProvider` seam to the vendor API
//! - `VerificationService`, which fills generated client request ids,
//!   forwards to the provider and tags failures with the endpoint operation
//! - A recording mock provider for handler and service tests

pub mod mock;
mod service;
mod traits;


pub use service::VerificationService;
pub use traits::IdentityProvider;
