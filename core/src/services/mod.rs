//! Business services containing the gateway's dispatch logic.

pub mod verification;

// Re-export commonly used types
pub use verification::{IdentityProvider, VerificationService};
