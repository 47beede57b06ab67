//! Error types for the fallible edges of the library.
//!
//! Rendering itself never fails: malformed chord attributes degrade to an
//! empty or partial diagram. Errors only come from loading a chord catalog
//! or style tokens and from JSON export.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// The catalog file could not be read.
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON input could not be decoded, or a model could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid UTF-8 in chord data")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, ChordError>;
