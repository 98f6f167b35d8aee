//! Route handlers
//!
//! - `health` - root identification string and health document
//! - `verification` - unify initialize, status and bind endpoints

pub mod health;
pub mod verification;
