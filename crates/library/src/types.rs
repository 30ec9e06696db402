//! Core domain types for a media library snapshot.
//!
//! The surrounding application owns these records; everything in this
//! workspace only reads them. Field names serialize in camelCase so the
//! snapshot files written by the backend load without translation.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::parser::parse_timestamp_ms;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for a video
pub type VideoId = String;

/// Unique identifier for a user-defined collection
pub type CollectionId = String;

// =============================================================================
// Video
// =============================================================================

/// A downloaded video as the library knows it.
///
/// Optional fields degrade gracefully: an absent value means "this signal
/// has nothing to say", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISO-8601 timestamp of when the video was added to the library
    #[serde(default)]
    pub added_at: String,
    /// Original creation date as `YYYYMMDD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_filename: Option<String>,
    /// Epoch milliseconds of the most recent playback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played_at: Option<i64>,
}

impl Video {
    /// Create a video with only the required fields set
    pub fn new(id: impl Into<VideoId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// View count with absent and NaN values read as zero
    pub fn views(&self) -> f64 {
        match self.view_count {
            Some(count) if !count.is_nan() => count,
            _ => 0.0,
        }
    }

    /// `added_at` as epoch milliseconds, `None` if it doesn't parse
    pub fn added_at_ms(&self) -> Option<i64> {
        parse_timestamp_ms(&self.added_at)
    }

    /// Key used for natural ordering: the filename, or the title without one
    pub fn sequence_key(&self) -> &str {
        self.video_filename.as_deref().unwrap_or(&self.title)
    }

    /// Author, treating an empty string as absent
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    /// Series title, treating an empty string as absent
    pub fn series(&self) -> Option<&str> {
        self.series_title.as_deref().filter(|s| !s.is_empty())
    }

    /// Tags as a set (duplicates collapse)
    pub fn tag_set(&self) -> HashSet<&str> {
        self.tags
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

// =============================================================================
// Collection
// =============================================================================

/// A user-defined, ordered grouping of videos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    #[serde(default)]
    pub name: String,
    /// Video ids in collection order; position 0 is the first video
    #[serde(default)]
    pub videos: Vec<VideoId>,
}

impl Collection {
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Builder-style helper to append a video id
    pub fn with_video(mut self, video_id: impl Into<VideoId>) -> Self {
        self.videos.push(video_id.into());
        self
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v == video_id)
    }

    /// The first video in collection order, if any
    pub fn first_video(&self) -> Option<&str> {
        self.videos.first().map(String::as_str)
    }
}

// =============================================================================
// LibraryIndex - In-memory snapshot
// =============================================================================

/// Read-only snapshot of the library with lookup indices.
///
/// Videos keep the order they were loaded in; lookups by id and by
/// collection membership are O(1).
#[derive(Debug, Default)]
pub struct LibraryIndex {
    pub(crate) videos: Vec<Video>,
    pub(crate) collections: Vec<Collection>,

    /// Position of each video in `videos`
    pub(crate) by_id: HashMap<VideoId, usize>,
    /// Collection ids each video belongs to
    pub(crate) membership: HashMap<VideoId, Vec<CollectionId>>,
}

impl LibraryIndex {
    /// Creates a new, empty LibraryIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a video by id
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.by_id.get(id).map(|&pos| &self.videos[pos])
    }

    /// All videos in load order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// All collections in load order
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Get a collection by id
    pub fn get_collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Ids of every collection that lists this video
    pub fn collections_of(&self, video_id: &str) -> &[CollectionId] {
        self.membership
            .get(video_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Insert a video, replacing any previous video with the same id
    pub fn insert_video(&mut self, video: Video) {
        match self.by_id.get(&video.id) {
            Some(&pos) => self.videos[pos] = video,
            None => {
                self.by_id.insert(video.id.clone(), self.videos.len());
                self.videos.push(video);
            }
        }
    }

    /// Insert a collection and update the membership index
    pub fn insert_collection(&mut self, collection: Collection) {
        for video_id in &collection.videos {
            let entry = self.membership.entry(video_id.clone()).or_default();
            if !entry.contains(&collection.id) {
                entry.push(collection.id.clone());
            }
        }
        self.collections.push(collection);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.videos.len(), self.collections.len())
    }
}
