//! Ordering a video list by a `SortOption`.
//!
//! ## Rules
//! - The input slice is never touched; callers get a new vector of references
//! - Every sort is stable, so videos that compare equal keep their input order
//! - Missing values (unparsable `addedAt`, absent `date`) go last in both
//!   directions

use crate::shuffle::shuffle_hash;
use crate::sort_option::SortOption;
use library::{Video, locale_cmp};
use std::cmp::{Ordering, Reverse};
use tracing::{debug, instrument};

/// Return `videos` ordered by `option`.
///
/// `seed` only matters for `SortOption::Random`.
#[instrument(skip(videos), fields(count = videos.len()))]
pub fn sort_videos(videos: &[Video], option: SortOption, seed: u32) -> Vec<&Video> {
    let mut sorted: Vec<&Video> = videos.iter().collect();
    if sorted.len() < 2 {
        return sorted;
    }

    match option {
        SortOption::DateDesc => sorted.sort_by_cached_key(|v| {
            let added = v.added_at_ms();
            (added.is_none(), Reverse(added))
        }),
        SortOption::DateAsc => sorted.sort_by_cached_key(|v| {
            let added = v.added_at_ms();
            (added.is_none(), added)
        }),
        SortOption::ViewsDesc => sorted.sort_by(|a, b| compare_views(b, a)),
        SortOption::ViewsAsc => sorted.sort_by(|a, b| compare_views(a, b)),
        SortOption::NameAsc => sorted.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortOption::VideoDateDesc => sorted.sort_by(|a, b| compare_video_date(a, b, true)),
        SortOption::VideoDateAsc => sorted.sort_by(|a, b| compare_video_date(a, b, false)),
        SortOption::Random => sorted.sort_by_cached_key(|v| shuffle_hash(&v.id, seed)),
    }

    debug!("Sorted {} videos by {}", sorted.len(), option);
    sorted
}

fn compare_views(a: &Video, b: &Video) -> Ordering {
    a.views()
        .partial_cmp(&b.views())
        .unwrap_or(Ordering::Equal)
}

/// Compare `YYYYMMDD` dates; a video without one is always after a video with one
fn compare_video_date(a: &Video, b: &Video, descending: bool) -> Ordering {
    let a_date = a.date.as_deref().filter(|d| !d.is_empty());
    let b_date = b.date.as_deref().filter(|d| !d.is_empty());

    match (a_date, b_date) {
        (Some(x), Some(y)) if descending => y.cmp(x),
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Video {
        Video::new(id, title)
    }

    fn ids(sorted: &[&Video]) -> Vec<String> {
        sorted.iter().map(|v| v.id.clone()).collect()
    }

    fn create_test_videos() -> Vec<Video> {
        let mut a = video("1", "banana");
        a.added_at = "2024-01-02T00:00:00Z".to_string();
        a.view_count = Some(100.0);
        a.date = Some("20200101".to_string());

        let mut b = video("2", "Apple");
        b.added_at = "2024-01-03T00:00:00Z".to_string();
        b.view_count = Some(200.0);
        b.date = Some("20210101".to_string());

        let mut c = video("3", "cherry");
        c.added_at = "2024-01-01T00:00:00Z".to_string();
        c.view_count = Some(50.0);

        vec![a, b, c]
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_videos(&[], SortOption::DateDesc, 0).is_empty());
    }

    #[test]
    fn test_views_desc() {
        let videos = create_test_videos();
        let sorted = sort_videos(&videos, SortOption::ViewsDesc, 0);
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_views_asc_missing_counts_as_zero() {
        let mut videos = create_test_videos();
        videos.push(video("4", "no views"));
        let sorted = sort_videos(&videos, SortOption::ViewsAsc, 0);
        assert_eq!(ids(&sorted), vec!["4", "3", "1", "2"]);
    }

    #[test]
    fn test_date_desc_and_asc() {
        let videos = create_test_videos();
        assert_eq!(
            ids(&sort_videos(&videos, SortOption::DateDesc, 0)),
            vec!["2", "1", "3"]
        );
        assert_eq!(
            ids(&sort_videos(&videos, SortOption::DateAsc, 0)),
            vec!["3", "1", "2"]
        );
    }

    #[test]
    fn test_unparsable_added_at_goes_last() {
        let mut videos = create_test_videos();
        videos.insert(0, video("bad", "bad date"));

        let desc = sort_videos(&videos, SortOption::DateDesc, 0);
        let asc = sort_videos(&videos, SortOption::DateAsc, 0);
        assert_eq!(desc.last().unwrap().id, "bad");
        assert_eq!(asc.last().unwrap().id, "bad");
    }

    #[test]
    fn test_name_asc_is_case_insensitive() {
        let videos = create_test_videos();
        let sorted = sort_videos(&videos, SortOption::NameAsc, 0);
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_missing_video_date_always_last() {
        let videos = create_test_videos();
        assert_eq!(
            ids(&sort_videos(&videos, SortOption::VideoDateDesc, 0)),
            vec!["2", "1", "3"]
        );
        assert_eq!(
            ids(&sort_videos(&videos, SortOption::VideoDateAsc, 0)),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let videos = vec![video("a", "x"), video("b", "x"), video("c", "x")];
        let sorted = sort_videos(&videos, SortOption::ViewsDesc, 0);
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_random_orders_by_hash() {
        let videos = create_test_videos();
        let sorted = sort_videos(&videos, SortOption::Random, 7);

        let hashes: Vec<u32> = sorted.iter().map(|v| shuffle_hash(&v.id, 7)).collect();
        let mut expected = hashes.clone();
        expected.sort();
        assert_eq!(hashes, expected);
    }

    #[test]
    fn test_input_untouched() {
        let videos = create_test_videos();
        let before = videos.clone();
        let _ = sort_videos(&videos, SortOption::NameAsc, 0);
        assert_eq!(videos, before);
    }
}
