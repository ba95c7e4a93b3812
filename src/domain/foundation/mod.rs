//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of a ranking run.

mod errors;
mod impact;
mod weight;

pub use errors::{ErrorCode, TopsisError};
pub use impact::Impact;
pub use weight::Weight;
