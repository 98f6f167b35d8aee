//! Wire types shared by every endpoint

pub mod response;

pub use response::ErrorEnvelope;
