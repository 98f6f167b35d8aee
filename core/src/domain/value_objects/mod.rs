//! Value objects wrapping what the identity provider returns.

pub mod verification_result;

pub use verification_result::{UnifySummary, VerificationResult};
