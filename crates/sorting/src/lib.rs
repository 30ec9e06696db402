//! # Sorting Crate
//!
//! Orders video lists for the library views.
//!
//! ## Components
//!
//! ### SortOption
//! The closed set of orderings (added date, views, name, creation date,
//! seeded shuffle) and validation of raw query values against it.
//!
//! ### sort_videos
//! Pure, stable sort returning a new vector of references.
//!
//! ### Shuffle
//! `shuffle_hash` makes a shuffle reproducible from a seed; `random_seed`
//! draws a fresh one when the user asks for a reshuffle.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sorting::{sort_videos, validate_sort_option, SortOption};
//!
//! let option = validate_sort_option(query.get("sort"), SortOption::DateDesc);
//! let ordered = sort_videos(index.videos(), option, seed);
//! ```

// Public modules
pub mod shuffle;
pub mod sort;
pub mod sort_option;
pub mod state;

// Re-export commonly used items
pub use shuffle::{SEED_RANGE, random_seed, shuffle_hash};
pub use sort::sort_videos;
pub use sort_option::{
    ParseSortOptionError, SortOption, validate_sort_option, validate_sort_option_str,
};
pub use state::SortState;
