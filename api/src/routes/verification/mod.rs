//! Verification route handlers
//!
//! Every handler decodes and validates its input, performs a single call
//! through `VerificationService` and shapes the provider's answer:
//! - `POST /initialize` answers with the `UnifySummary` projection
//! - `POST /unify`, `POST /verify`, `GET /unify/status/{id}` and
//!   `POST /unify/bind` pass the provider result through unchanged

pub mod bind;
pub mod initialize;
pub mod status;

pub use bind::unify_bind;
pub use initialize::{initialize, unify};
pub use status::{unify_status, verify};
