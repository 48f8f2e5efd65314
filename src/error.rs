use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for snipsync operations
#[derive(Error, Debug)]
pub enum SnipsyncError {
    /// IO error when reading source files or the document
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Source file not found or not readable as a file
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Target document missing or not a regular file
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// No start placeholder for an extracted identifier in the document
    #[error("Start tag for '{identifier}' not found in document")]
    MissingStartTag { identifier: String },

    /// Start placeholder for an identifier occurs more than once
    #[error("Start tag for '{identifier}' found {count} times in document, expected exactly one")]
    DuplicateStartTag { identifier: String, count: usize },

    /// Start placeholder has no end placeholder after it
    #[error("End tag not found following the start tag for '{identifier}'")]
    MissingEndTag { identifier: String },

    /// A tagged region was still open when its source file ended
    #[error("Unterminated example region '{identifier}' in {path}")]
    UnterminatedRegion { identifier: String, path: PathBuf },

    /// A start marker appeared while a region was still open
    #[error("Example region '{inner}' starts inside unfinished region '{outer}' in {path}")]
    NestedRegion {
        outer: String,
        inner: String,
        path: PathBuf,
    },

    /// Regex compilation error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// `WalkDir` error when traversing the source tree
    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnipsyncError>;
