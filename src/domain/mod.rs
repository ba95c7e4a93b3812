//! Domain layer containing the ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (weights, impacts, errors)
//! - `topsis` - Pure domain services for TOPSIS ranking

pub mod foundation;
pub mod topsis;
