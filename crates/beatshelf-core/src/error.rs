//! Error types for beatshelf-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Failed to parse catalog file {path}: {message}")]
    CatalogParse {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to write catalog file {path}: {message}")]
    CatalogWrite {
        path: PathBuf,
        message: String,
    },

    #[error("Beatmap library not found at: {0}")]
    LibraryNotFound(PathBuf),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;
