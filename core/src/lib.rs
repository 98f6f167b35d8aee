//! # Unify Core
//!
//! Domain layer of the Unify Gateway. This crate contains the transient
//! request/response entities, the error kinds every endpoint maps to HTTP,
//! the `IdentityProvider` seam to the vendor API and the verification
//! service that dispatches validated requests to it.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
