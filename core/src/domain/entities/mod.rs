//! Request-scoped entities forwarded to the identity provider.

pub mod verification;


pub use verification::{BindRequest, PossessionType, StatusQuery, VerificationRequest};
