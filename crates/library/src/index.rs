//! LibraryIndex building and validation.
//!
//! Builds the in-memory snapshot from the two snapshot files:
//! - primary store (videos in load order, id lookup)
//! - secondary index (collection membership per video)
//! - integrity checks before anything downstream sees the data

use crate::error::{LibraryError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl LibraryIndex {
    /// Load a library snapshot from a directory
    ///
    /// Expects `videos.json`; `collections.json` is optional and an absent
    /// file means the user has no collections yet.
    pub fn load_from_files(library_dir: &Path) -> Result<Self> {
        info!("Loading library snapshot from {:?}", library_dir);

        let videos_path = library_dir.join("videos.json");
        let collections_path = library_dir.join("collections.json");

        // Both files parse independently
        let (videos, collections) = rayon::join(
            || parser::parse_videos(&videos_path),
            || {
                if collections_path.exists() {
                    parser::parse_collections(&collections_path)
                } else {
                    debug!("No collections file at {:?}", collections_path);
                    Ok(Vec::new())
                }
            },
        );
        let videos = videos?;
        let collections = collections?;

        info!(
            "Loaded {} videos, {} collections",
            videos.len(),
            collections.len()
        );

        let index = Self::from_parts(videos, collections)?;
        Ok(index)
    }

    /// Build and validate an index from already-parsed records
    pub fn from_parts(videos: Vec<Video>, collections: Vec<Collection>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(videos.len());
        for video in &videos {
            if !seen.insert(video.id.as_str()) {
                return Err(LibraryError::DuplicateId(video.id.clone()));
            }
        }

        let mut index = LibraryIndex::new();
        for video in videos {
            index.insert_video(video);
        }
        for collection in collections {
            index.insert_collection(collection);
        }

        index.validate()?;
        Ok(index)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - every collection entry points at a video in the library
    /// - view counts are not negative
    pub fn validate(&self) -> Result<()> {
        for collection in &self.collections {
            for video_id in &collection.videos {
                if !self.by_id.contains_key(video_id) {
                    return Err(LibraryError::MissingReference {
                        collection: collection.id.clone(),
                        video: video_id.clone(),
                    });
                }
            }
        }

        for video in &self.videos {
            if let Some(count) = video.view_count {
                if count < 0.0 {
                    return Err(LibraryError::InvalidValue {
                        field: "viewCount".to_string(),
                        id: video.id.clone(),
                        value: count.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Case-insensitive title search.
    ///
    /// Exact title matches come first, then substring matches, each group
    /// in load order.
    pub fn search_title(&self, query: &str) -> Vec<&Video> {
        let query = query.to_lowercase();
        let mut exact = Vec::new();
        let mut partial = Vec::new();

        for video in &self.videos {
            let title = video.title.to_lowercase();
            if title == query {
                exact.push(video);
            } else if title.contains(&query) {
                partial.push(video);
            }
        }

        exact.extend(partial);
        exact
    }
}
