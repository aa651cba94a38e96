//! docsim command line
//!
//! Everything around the core engine: reading documents, timing each
//! stage and rendering reports.
//!
//! ## Module Structure
//!
//! - `config` - Comparison settings (engines, output format, fragment size)
//! - `error` - Error type for loading and rendering
//! - `loader` - Reads documents from disk as raw bytes
//! - `pipeline` - Normalize, compare and time a document pair
//! - `report` - Text and JSON rendering
//! - `tracing` - Logging setup

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod tracing;

pub use config::{AlgorithmSelection, CompareConfig, OutputFormat};
pub use error::{Error, Result};
pub use pipeline::{compare_documents, run_compare, run_normalize, ComparisonReport};
