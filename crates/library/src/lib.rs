//! # Library Crate
//!
//! Domain types and snapshot loading for the media library.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Video, Collection, LibraryIndex)
//! - **parser**: Parse JSON snapshot files and timestamps
//! - **index**: Build and validate the in-memory snapshot
//! - **collation**: Locale-like and natural string ordering
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use library::LibraryIndex;
//! use std::path::Path;
//!
//! let index = LibraryIndex::load_from_files(Path::new("data/library"))?;
//!
//! let video = index.get_video("abc123").unwrap();
//! println!("{} is in {} collections", video.title, index.collections_of(&video.id).len());
//! ```

// Public modules
pub mod collation;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use collation::{locale_cmp, natural_cmp};
pub use error::{LibraryError, Result};
pub use parser::parse_timestamp_ms;
pub use types::{
    // Type aliases
    CollectionId,
    VideoId,
    // Core types
    Collection,
    LibraryIndex,
    Video,
};
