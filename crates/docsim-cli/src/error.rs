//! Error types for the docsim command line.
//!
//! The core engine is total and never fails; everything here happens
//! around it (reading documents, validating options, writing JSON).

use std::path::PathBuf;
use thiserror::Error;

/// Common error type for docsim operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A source document could not be read
    #[error("cannot read document '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using docsim Error.
pub type Result<T> = std::result::Result<T, Error>;
