//! The closed set of ways a video list can be ordered.
//!
//! Raw values arrive as strings from query parameters, so parsing is the
//! only entry point that can see an unknown option; everything past
//! `validate_sort_option` works with the enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How to order a list of videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Most recently added first
    #[default]
    DateDesc,
    DateAsc,
    ViewsDesc,
    ViewsAsc,
    NameAsc,
    /// Newest original creation date first
    VideoDateDesc,
    VideoDateAsc,
    /// Seeded, reproducible shuffle
    Random,
}

/// Raised when a string doesn't name a sort option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort option: {0}")]
pub struct ParseSortOptionError(pub String);

impl SortOption {
    /// Every option, in display order
    pub const ALL: [SortOption; 8] = [
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::ViewsDesc,
        SortOption::ViewsAsc,
        SortOption::NameAsc,
        SortOption::VideoDateDesc,
        SortOption::VideoDateAsc,
        SortOption::Random,
    ];

    /// The wire name used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::DateDesc => "dateDesc",
            SortOption::DateAsc => "dateAsc",
            SortOption::ViewsDesc => "viewsDesc",
            SortOption::ViewsAsc => "viewsAsc",
            SortOption::NameAsc => "nameAsc",
            SortOption::VideoDateDesc => "videoDateDesc",
            SortOption::VideoDateAsc => "videoDateAsc",
            SortOption::Random => "random",
        }
    }

    /// Whether the ordering depends on a shuffle seed
    pub fn is_seeded(self) -> bool {
        matches!(self, SortOption::Random)
    }
}

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dateDesc" => Ok(SortOption::DateDesc),
            "dateAsc" => Ok(SortOption::DateAsc),
            "viewsDesc" => Ok(SortOption::ViewsDesc),
            "viewsAsc" => Ok(SortOption::ViewsAsc),
            "nameAsc" => Ok(SortOption::NameAsc),
            "videoDateDesc" => Ok(SortOption::VideoDateDesc),
            "videoDateAsc" => Ok(SortOption::VideoDateAsc),
            "random" => Ok(SortOption::Random),
            _ => Err(ParseSortOptionError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse `raw`, falling back to `fallback` when it is missing or unknown
pub fn validate_sort_option(raw: Option<&str>, fallback: SortOption) -> SortOption {
    match raw.map(str::parse::<SortOption>) {
        Some(Ok(option)) => option,
        _ => fallback,
    }
}

/// Like `validate_sort_option`, with the fallback itself unvalidated.
///
/// An unknown fallback degrades to `DateDesc`.
pub fn validate_sort_option_str(raw: Option<&str>, fallback: Option<&str>) -> SortOption {
    let fallback = validate_sort_option(fallback, SortOption::default());
    validate_sort_option(raw, fallback)
}
