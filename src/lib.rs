//! TOPSIS - Multi-criteria ranking of alternatives
//!
//! This crate ranks alternatives by their relative closeness to an ideal
//! solution (TOPSIS), reading a decision table from a CSV or spreadsheet
//! file and writing the scored table back out.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
