use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use library::{LibraryIndex, Video};
use recommend::{rank_candidates, RecommendationRequest, ScoredCandidate, WeightOverrides};
use sorting::{random_seed, sort_videos, validate_sort_option, SortOption, SortState};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

mod logging;

use logging::{Logging, LoggingConfig};

/// media-lib - Browse and get recommendations from a local video library
#[derive(Parser)]
#[command(name = "media-lib")]
#[command(about = "Sort, search and get recommendations from a downloaded video library", long_about = None)]
struct Cli {
    /// Directory holding videos.json and collections.json
    #[arg(short, long, default_value = "data/library")]
    library_dir: PathBuf,

    /// Turn on debug logging (also shows recommendation breakdowns)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List videos in a given order
    Sort {
        /// Sort option (dateDesc, dateAsc, viewsDesc, viewsAsc, nameAsc,
        /// videoDateDesc, videoDateAsc, random); unknown values fall back to dateDesc
        #[arg(long)]
        option: Option<String>,

        /// Shuffle seed for the random order
        #[arg(long)]
        seed: Option<u32>,

        /// Draw a fresh seed and shuffle
        #[arg(long, conflicts_with = "seed")]
        shuffle: bool,

        /// Number of videos to show
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Recommend what to watch after a video
    Recommend {
        /// Id of the video being watched
        #[arg(long)]
        video_id: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Show the per-signal breakdown for each recommendation
        #[arg(long)]
        explain: bool,

        /// JSON file with weight overrides, e.g. {"author": 0.5}
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Single weight override as name=value (repeatable, wins over --weights)
        #[arg(long = "weight", value_parser = parse_weight_arg)]
        weight: Vec<(String, f64)>,
    },

    /// Show one video and the collections it belongs to
    Show {
        #[arg(long)]
        video_id: String,
    },

    /// Search for videos by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Print a fresh shuffle seed
    Seed,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = Logging::init(LoggingConfig::from_env(false))?;
    if cli.debug {
        logging.set_debug(true)?;
        debug!("Debug logging enabled");
    }

    match cli.command {
        Commands::Sort {
            option,
            seed,
            shuffle,
            limit,
        } => {
            let index = load_library(&cli.library_dir)?;
            handle_sort(&index, option.as_deref(), seed, shuffle, limit)
        }
        Commands::Recommend {
            video_id,
            limit,
            explain,
            weights,
            weight,
        } => {
            let index = load_library(&cli.library_dir)?;
            let overrides = build_overrides(weights.as_deref(), &weight)?;
            let explain = explain || logging.is_debug();
            handle_recommend(&index, &video_id, limit, explain, overrides)
        }
        Commands::Show { video_id } => {
            let index = load_library(&cli.library_dir)?;
            handle_show(&index, &video_id)
        }
        Commands::Search { title } => {
            let index = load_library(&cli.library_dir)?;
            handle_search(&index, &title)
        }
        Commands::Seed => {
            println!("{}", random_seed());
            Ok(())
        }
    }
}

fn load_library(library_dir: &Path) -> Result<LibraryIndex> {
    let start = Instant::now();
    let index = LibraryIndex::load_from_files(library_dir)
        .with_context(|| format!("Failed to load library from {}", library_dir.display()))?;
    let (videos, collections) = index.counts();
    info!(
        "Loaded {} videos and {} collections in {:?}",
        videos,
        collections,
        start.elapsed()
    );
    Ok(index)
}

/// Parse `name=value` for --weight
fn parse_weight_arg(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight value '{}': {}", value, e))?;
    Ok((name.trim().to_string(), value))
}

/// Combine the weights file with individual --weight flags (flags win)
fn build_overrides(file: Option<&Path>, flags: &[(String, f64)]) -> Result<WeightOverrides> {
    let from_file = match file {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path)
                    .with_context(|| format!("Failed to open weights file {}", path.display()))?,
            );
            serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse weights file {}", path.display()))?
        }
        None => WeightOverrides::default(),
    };

    let mut from_flags = WeightOverrides::new();
    for (name, value) in flags {
        from_flags.set(name, *value)?;
    }

    Ok(from_flags.or(from_file))
}

/// Handle the 'sort' command
fn handle_sort(
    index: &LibraryIndex,
    raw_option: Option<&str>,
    seed: Option<u32>,
    shuffle: bool,
    limit: usize,
) -> Result<()> {
    let state = if shuffle {
        SortState::new(SortOption::Random, random_seed())
    } else {
        SortState::new(
            validate_sort_option(raw_option, SortOption::DateDesc),
            seed.unwrap_or(0),
        )
    };
    debug!("Sorting with {:?}", state);

    let sorted = sort_videos(index.videos(), state.option, state.seed);

    println!(
        "{}",
        format!("Videos ({})", state.to_query()).bold().blue()
    );
    for (rank, video) in sorted.iter().take(limit).enumerate() {
        println!(
            "{}. {} {}",
            (rank + 1).to_string().green(),
            video.title,
            describe(video).dimmed()
        );
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    index: &LibraryIndex,
    video_id: &str,
    limit: usize,
    explain: bool,
    overrides: WeightOverrides,
) -> Result<()> {
    let current = index
        .get_video(video_id)
        .ok_or_else(|| anyhow!("Video {} not found", video_id))?;

    let start = Instant::now();
    let request = RecommendationRequest::new(current, index.videos(), index.collections())
        .with_weights(overrides);
    let ranked = rank_candidates(&request);
    info!("Ranked {} candidates in {:?}", ranked.len(), start.elapsed());

    print_recommendations(current, &ranked[..ranked.len().min(limit)], explain);
    Ok(())
}

/// Handle the 'show' command
fn handle_show(index: &LibraryIndex, video_id: &str) -> Result<()> {
    let video = index
        .get_video(video_id)
        .ok_or_else(|| anyhow!("Video {} not found", video_id))?;

    println!("{}", video.title.bold().blue());
    println!("{}Id: {}", "• ".green(), video.id);
    if let Some(author) = video.author_name() {
        println!("{}Author: {}", "• ".green(), author);
    }
    if let Some(series) = video.series() {
        println!("{}Series: {}", "• ".green(), series);
    }
    println!("{}Added: {}", "• ".green(), video.added_at);
    if let Some(date) = &video.date {
        println!("{}Created: {}", "• ".green(), date);
    }
    println!("{}Views: {}", "• ".cyan(), video.views());
    if let Some(tags) = &video.tags {
        println!("{}Tags: {}", "• ".cyan(), tags.join(", "));
    }

    let collections = index.collections_of(&video.id);
    if !collections.is_empty() {
        println!("Collections:");
        for id in collections {
            if let Some(collection) = index.get_collection(id) {
                let marker = if collection.first_video() == Some(video.id.as_str()) {
                    " (first)"
                } else {
                    ""
                };
                println!("  - {}{}", collection.name, marker);
            }
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(index: &LibraryIndex, title: &str) -> Result<()> {
    let matches = index.search_title(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    for video in matches.iter().take(20) {
        println!("{}: {} {}", video.id, video.title, describe(video).dimmed());
    }
    if matches.is_empty() {
        println!("No videos found");
    }
    Ok(())
}

/// Short metadata suffix for list output
fn describe(video: &Video) -> String {
    let mut parts = Vec::new();
    if let Some(author) = video.author_name() {
        parts.push(author.to_string());
    }
    parts.push(format!("{} views", video.views()));
    if let Some(date) = &video.date {
        parts.push(date.clone());
    }
    format!("[{}]", parts.join(" · "))
}

/// Helper function to format and print recommendations
fn print_recommendations(current: &Video, recommendations: &[ScoredCandidate<'_>], explain: bool) {
    println!(
        "{}",
        format!("Up next after '{}':", current.title).bold().blue()
    );
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} {} - Score: {:.3}",
            (rank + 1).to_string().green(),
            rec.video.title,
            describe(rec.video).dimmed(),
            rec.score
        );
        if explain {
            println!("   Explanation: {}", rec.explanation());
        }
    }
}
