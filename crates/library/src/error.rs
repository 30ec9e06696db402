//! Error types for the library crate.
//!
//! Loading a snapshot can fail on I/O, on malformed JSON, or on a snapshot
//! that parses but is internally inconsistent (duplicate ids, collections
//! pointing at videos that are not in the library).

use thiserror::Error;

/// Errors that can occur while loading or validating a library snapshot
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Snapshot file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot file is not valid JSON for the expected shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field had a value outside its documented domain
    #[error("Invalid value for {field} on video {id}: {value}")]
    InvalidValue {
        field: String,
        id: String,
        value: String,
    },

    /// Two videos in the snapshot share the same id
    #[error("Duplicate video id: {0}")]
    DuplicateId(String),

    /// A collection references a video that doesn't exist
    #[error("Missing reference: collection {collection} lists unknown video {video}")]
    MissingReference { collection: String, video: String },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LibraryError>;
