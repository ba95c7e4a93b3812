//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableSource` - Loads an input file into a raw table
//! - `ResultSink` - Writes a ranked result table

mod result_sink;
mod table_source;

pub use result_sink::ResultSink;
pub use table_source::{ensure_file_exists, TableSource};
