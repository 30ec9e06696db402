//! Sort state as carried in a page's query string.
//!
//! Keeping `sort` and `seed` in the URL lets a shuffled list survive
//! navigation: coming back to the page replays the same seed.

use crate::sort_option::{SortOption, validate_sort_option};

/// The sort option and shuffle seed chosen for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub option: SortOption,
    pub seed: u32,
}

impl SortState {
    pub fn new(option: SortOption, seed: u32) -> Self {
        Self { option, seed }
    }

    /// Read `sort` and `seed` from a query string such as `sort=random&seed=42`.
    ///
    /// A leading `?` is allowed. Unknown keys are ignored, an unknown `sort`
    /// becomes `fallback`, and a missing or malformed `seed` becomes 0.
    pub fn from_query(query: &str, fallback: SortOption) -> Self {
        let mut raw_sort = None;
        let mut seed = 0;

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "sort" => raw_sort = Some(value),
                "seed" => seed = value.parse().unwrap_or(0),
                _ => {}
            }
        }

        Self {
            option: validate_sort_option(raw_sort, fallback),
            seed,
        }
    }

    /// Render back to a query string; the seed is only kept for shuffles
    pub fn to_query(&self) -> String {
        if self.option.is_seeded() {
            format!("sort={}&seed={}", self.option, self.seed)
        } else {
            format!("sort={}", self.option)
        }
    }
}
