pub mod cors;
pub mod error_handler;

pub use cors::*;
pub use error_handler::*;
