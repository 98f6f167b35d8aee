pub mod error;

pub use error::{json_error_handler, not_found, path_error_handler, ApiError};
