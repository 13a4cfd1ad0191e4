//! Error types for the clipflow-core library.
//!
//! Validation errors are raised before any search begins so that corrupt
//! inputs never reach the optimizer; nothing in the core substitutes a
//! default score for a failed input.

use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::ClipId;

/// Custom error types for clipflow
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("insufficient clips: {count} supplied, at least 2 required to optimize transitions")]
    InsufficientClips { count: usize },

    #[error("invalid profile for clip '{clip}': {field} = {value} is outside [0.0, 1.0]")]
    InvalidProfile {
        clip: ClipId,
        field: &'static str,
        value: f64,
    },

    #[error("color profile for clip '{clip}' contains no colors")]
    EmptyColorProfile { clip: ClipId },

    #[error("no profile found for clip '{clip}'")]
    MissingProfile { clip: ClipId },

    #[error("no clip files found")]
    NoClipsFound,

    #[error("clip file not found: {}", path.display())]
    MissingClipFile { path: PathBuf },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid path: {0}")]
    PathError(String),
}

/// Result type for clipflow operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
