//! Moodshelf
//!
//! A mood-based wellness content recommender. Given a self-reported or
//! text-inferred mood, it filters a small local catalog of music,
//! meditations, podcasts and reading material by mood tag, falling back to
//! TF-IDF text similarity when no tag matches.

pub mod catalog;
pub mod config;
pub mod error;
pub mod math;
pub mod mood;
pub mod recommend;
pub mod server;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, Result};

pub use catalog::{Catalog, CatalogItem, CatalogTable, ContentType};
pub use mood::{DetectionSource, MoodLabel};
pub use recommend::{Recommendation, RecommendationMode, RecommendationSet, Recommender};
