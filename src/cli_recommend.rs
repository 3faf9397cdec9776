//! Interactive recommendation prompt.
//!
//! Reads a mood (canonical label or free text) and a content type from
//! stdin and prints a ranked table to stdout. Loader problems surface as
//! warnings and empty results, never as a nonzero exit.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodshelf::catalog::{Catalog, ContentType};
use moodshelf::config::AppConfig;
use moodshelf::mood::{self, MoodLabel};
use moodshelf::recommend::{RecommendationMode, RecommendationSet, Recommender};

fn main() {
    init_logging();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config from environment: {e}, using defaults");
        AppConfig::default()
    });

    let catalog = Catalog::load(&config.catalog.dir);
    let recommender = Recommender::from_config(&config.recommend);
    let top_n = config.recommend.default_top_n;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("How are you feeling? (a mood like happy/stressed/calm, or a sentence): ");
        let Some(mood_input) = read_trimmed(&mut lines) else {
            break;
        };
        if mood_input.is_empty() {
            continue;
        }

        let mood = match MoodLabel::from_str(&mood_input) {
            Ok(label) => label,
            Err(_) => {
                let detected = mood::detect(&mood_input);
                println!("Reading that as \"{detected}\".");
                detected
            }
        };

        print!("What would you like? (music/meditation/podcast/reading, default music): ");
        let Some(type_input) = read_trimmed(&mut lines) else {
            break;
        };
        let content_type = ContentType::from_str(&type_input).unwrap_or(ContentType::Music);

        let set = recommender.recommend(catalog.table(content_type), mood, top_n);
        print_results(mood, content_type, &set);
    }
}

/// Prompt-flush and read one trimmed line; `None` on EOF or read failure.
fn read_trimmed(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    io::stdout().flush().ok();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn print_results(mood: MoodLabel, content_type: ContentType, set: &RecommendationSet) {
    if set.entries.is_empty() {
        println!("\nNo {content_type} items in the catalog for \"{mood}\".\n");
        return;
    }

    match set.mode {
        RecommendationMode::RandomFromTagMatch => {
            println!("\nPicked from items tagged \"{mood}\":\n");
        }
        RecommendationMode::RankedBySimilarity => {
            println!("\nClosest {content_type} matches for \"{mood}\":\n");
        }
    }

    println!("{:<42} {:<26} {:>7}  {}", "Title", "Creator", "Match", "Link");
    for entry in &set.entries {
        let similarity = match entry.similarity {
            Some(score) => format!("{score:.0}%"),
            None => "--".to_string(),
        };
        println!(
            "{:<42} {:<26} {:>7}  {}",
            entry.item.title, entry.item.creator, similarity, entry.item.url
        );
    }
    println!();
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodshelf=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
