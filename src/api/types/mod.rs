//! API-facing types

mod error;

pub use error::{ApiError, ApiErrorBody};
