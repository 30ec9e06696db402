//! Benchmarks for sorting
//!
//! Run with: cargo bench --package sorting
//!
//! Uses a synthetic library sized like a large personal collection.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use library::Video;
use sorting::{SortOption, sort_videos};

fn create_library(count: usize) -> Vec<Video> {
    (0..count)
        .map(|i| {
            let mut video = Video::new(format!("id-{}", i), format!("Video {}", count - i));
            video.added_at = format!("2023-{:02}-{:02}T08:30:00Z", (i % 12) + 1, (i % 28) + 1);
            video.view_count = Some((i % 97) as f64);
            video.date = Some(format!("20{:02}0101", i % 24));
            video
        })
        .collect()
}

fn bench_sort_options(c: &mut Criterion) {
    let videos = create_library(5_000);

    for option in [
        SortOption::DateDesc,
        SortOption::ViewsDesc,
        SortOption::NameAsc,
        SortOption::Random,
    ] {
        c.bench_function(&format!("sort_videos_{}", option), |b| {
            b.iter(|| {
                let sorted = sort_videos(black_box(&videos), black_box(option), black_box(42));
                black_box(sorted)
            })
        });
    }
}

criterion_group!(benches, bench_sort_options);
criterion_main!(benches);
