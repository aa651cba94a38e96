//! Document loading
//!
//! Documents are read as raw bytes; any encoding is accepted and the
//! normalizer decides what counts as a letter.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// A document read from disk
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }
}

/// Read one document
pub fn load_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(Document::new(path, bytes))
}

/// Read both documents of a comparison; fails before any is compared
pub fn load_pair(first: &Path, second: &Path) -> Result<(Document, Document)> {
    let first = load_document(first)?;
    let second = load_document(second)?;
    Ok((first, second))
}
