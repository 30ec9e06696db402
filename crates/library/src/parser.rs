//! Parser for library snapshot files.
//!
//! The backend writes two JSON arrays:
//! - videos.json: `[{"id": ..., "title": ..., "addedAt": ..., ...}, ...]`
//! - collections.json: `[{"id": ..., "name": ..., "videos": [...]}, ...]`
//!
//! Also home to timestamp parsing for `addedAt`, which is free-form
//! ISO-8601 in practice.

use crate::error::{LibraryError, Result};
use crate::types::{Collection, Video};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Open a snapshot file and deserialize its JSON body
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LibraryError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LibraryError::IoError(e),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| LibraryError::ParseError {
        file: path.display().to_string(),
        source,
    })
}

/// Parse the videos.json file
pub fn parse_videos(path: &Path) -> Result<Vec<Video>> {
    read_json(path)
}

/// Parse the collections.json file
pub fn parse_collections(path: &Path) -> Result<Vec<Collection>> {
    read_json(path)
}

/// Parse an ISO-8601 timestamp into epoch milliseconds.
///
/// Accepts, in order:
/// - RFC 3339 with offset: "2024-03-01T10:00:00Z", "2024-03-01T10:00:00+02:00"
/// - naive date-time, read as UTC: "2024-03-01T10:00:00.250"
/// - bare date, midnight UTC: "2024-03-01"
///
/// Anything else yields `None`.
pub fn parse_timestamp_ms(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}
