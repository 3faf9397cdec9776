//! Catalog loading and in-memory representation.
//!
//! The catalog is four flat CSV tables, one per content type. Tables are
//! loaded once, held read-only for the lifetime of the process, and never
//! written back. A missing or unreadable source is substituted with an
//! empty table and surfaced as a warning rather than an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// The four recommendable content categories.
///
/// Every catalog item belongs to exactly one type, determined by the table
/// it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Music,
    Meditation,
    Podcast,
    Reading,
}

impl ContentType {
    /// All content types, in table order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Music,
        ContentType::Meditation,
        ContentType::Podcast,
        ContentType::Reading,
    ];

    /// File name of the CSV source backing this table.
    pub fn source_file(&self) -> &'static str {
        match self {
            ContentType::Music => "music_catalog.csv",
            ContentType::Meditation => "meditation_catalog.csv",
            ContentType::Podcast => "podcast_catalog.csv",
            ContentType::Reading => "reading_catalog.csv",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Music => "music",
            ContentType::Meditation => "meditation",
            ContentType::Podcast => "podcast",
            ContentType::Reading => "reading",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(String);

impl std::str::FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "music" => Ok(ContentType::Music),
            "meditation" => Ok(ContentType::Meditation),
            "podcast" => Ok(ContentType::Podcast),
            "reading" => Ok(ContentType::Reading),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

/// One recommendable piece of content.
///
/// Optional source columns load as empty strings. The creator-name column
/// is normalized at load time from whichever of `artist`, `host` or
/// `creator` the source table carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub content_type: ContentType,
    pub title: String,
    pub creator: String,
    pub url: String,
    pub mood_hint: String,
    pub feature_text: String,
    pub tags: String,
}

impl CatalogItem {
    /// The per-item text used for similarity matching.
    ///
    /// Concatenates every descriptive field in a fixed order; any of them
    /// may carry mood-relevant vocabulary, not just `feature_text`.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title, self.creator, self.tags, self.mood_hint, self.feature_text
        )
    }
}

/// One loaded table of catalog items.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    content_type: ContentType,
    items: Vec<CatalogItem>,
}

/// Column priority for the creator-name field across source tables.
const CREATOR_COLUMNS: &[&str] = &["artist", "host", "creator"];

impl CatalogTable {
    /// Create a table from already-built items.
    pub fn new(content_type: ContentType, items: Vec<CatalogItem>) -> Self {
        Self {
            content_type,
            items,
        }
    }

    /// An empty table for the given content type.
    pub fn empty(content_type: ContentType) -> Self {
        Self::new(content_type, Vec::new())
    }

    /// Load one table from its CSV source under `dir`.
    ///
    /// Never fails: a missing or unreadable source yields an empty table
    /// and a warning, and malformed rows are skipped.
    pub fn load(dir: &Path, content_type: ContentType) -> Self {
        let path = dir.join(content_type.source_file());

        let mut reader = match csv::Reader::from_path(&path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(
                    table = %content_type,
                    path = %path.display(),
                    "Catalog source unreadable, substituting empty table: {e}"
                );
                return Self::empty(content_type);
            }
        };

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                warn!(
                    table = %content_type,
                    path = %path.display(),
                    "Catalog source has no readable header row: {e}"
                );
                return Self::empty(content_type);
            }
        };

        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };

        let title_col = column("title");
        let url_col = column("url");
        let mood_hint_col = column("mood_hint");
        let feature_text_col = column("feature_text");
        let tags_col = column("tags");
        let creator_col = CREATOR_COLUMNS.iter().find_map(|name| column(name));

        let field = |record: &csv::StringRecord, col: Option<usize>| {
            col.and_then(|i| record.get(i))
                .unwrap_or("")
                .trim()
                .to_string()
        };

        let mut items = Vec::new();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!(table = %content_type, "Skipping malformed catalog row: {e}");
                    continue;
                }
            };

            items.push(CatalogItem {
                content_type,
                title: field(&record, title_col),
                creator: field(&record, creator_col),
                url: field(&record, url_col),
                mood_hint: field(&record, mood_hint_col),
                feature_text: field(&record, feature_text_col),
                tags: field(&record, tags_col),
            });
        }

        Self::new(content_type, items)
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All four catalog tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    music: CatalogTable,
    meditation: CatalogTable,
    podcast: CatalogTable,
    reading: CatalogTable,
}

impl Catalog {
    /// Load every table from `dir`. Missing sources load as empty tables.
    pub fn load(dir: &Path) -> Self {
        Self {
            music: CatalogTable::load(dir, ContentType::Music),
            meditation: CatalogTable::load(dir, ContentType::Meditation),
            podcast: CatalogTable::load(dir, ContentType::Podcast),
            reading: CatalogTable::load(dir, ContentType::Reading),
        }
    }

    /// Build a catalog from pre-constructed tables. Tables not supplied
    /// are empty.
    pub fn from_tables(tables: Vec<CatalogTable>) -> Self {
        let mut catalog = Self::empty();
        for table in tables {
            match table.content_type() {
                ContentType::Music => catalog.music = table,
                ContentType::Meditation => catalog.meditation = table,
                ContentType::Podcast => catalog.podcast = table,
                ContentType::Reading => catalog.reading = table,
            }
        }
        catalog
    }

    /// A catalog with four empty tables.
    pub fn empty() -> Self {
        Self {
            music: CatalogTable::empty(ContentType::Music),
            meditation: CatalogTable::empty(ContentType::Meditation),
            podcast: CatalogTable::empty(ContentType::Podcast),
            reading: CatalogTable::empty(ContentType::Reading),
        }
    }

    pub fn table(&self, content_type: ContentType) -> &CatalogTable {
        match content_type {
            ContentType::Music => &self.music,
            ContentType::Meditation => &self.meditation,
            ContentType::Podcast => &self.podcast,
            ContentType::Reading => &self.reading,
        }
    }

    /// Total number of items across all tables.
    pub fn total_items(&self) -> usize {
        ContentType::ALL
            .iter()
            .map(|t| self.table(*t).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::str::FromStr;

    fn write_csv(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_content_type_roundtrip() {
        for content_type in ContentType::ALL {
            let parsed = ContentType::from_str(content_type.as_str()).unwrap();
            assert_eq!(parsed, content_type);
        }
        assert!(ContentType::from_str("video").is_err());
    }

    #[test]
    fn test_load_music_table_with_artist_column() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "music_catalog.csv",
            "title,artist,url,mood_hint,feature_text\n\
             Weightless,Marconi Union,https://example.com/w,calm relaxed,ambient slow soothing\n\
             Happy,Pharrell Williams,https://example.com/h,happy,upbeat cheerful pop\n",
        );

        let table = CatalogTable::load(dir.path(), ContentType::Music);
        assert_eq!(table.len(), 2);
        assert_eq!(table.items()[0].creator, "Marconi Union");
        assert_eq!(table.items()[0].content_type, ContentType::Music);
        // tags column absent -> empty string, not an error
        assert_eq!(table.items()[0].tags, "");
    }

    #[test]
    fn test_creator_column_priority() {
        let dir = tempfile::tempdir().unwrap();
        // Both host and creator present: host wins by priority.
        write_csv(
            dir.path(),
            "podcast_catalog.csv",
            "title,host,creator,url\nThe Daily Calm,Tamara Levitt,Someone Else,https://example.com/p\n",
        );

        let table = CatalogTable::load(dir.path(), ContentType::Podcast);
        assert_eq!(table.items()[0].creator, "Tamara Levitt");
    }

    #[test]
    fn test_missing_source_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = CatalogTable::load(dir.path(), ContentType::Reading);
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        // Second row has a stray quote; csv reports an error for it.
        write_csv(
            dir.path(),
            "meditation_catalog.csv",
            "title,creator,url\nBody Scan,Jon Kabat-Zinn,https://example.com/b\n\"broken,row\nBreath,Andy P,https://example.com/a\n",
        );

        let table = CatalogTable::load(dir.path(), ContentType::Meditation);
        assert!(table.len() >= 1);
        assert_eq!(table.items()[0].title, "Body Scan");
    }

    #[test]
    fn test_catalog_load_tolerates_partial_sources() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            dir.path(),
            "music_catalog.csv",
            "title,artist,url\nSong,Artist,https://example.com/s\n",
        );

        let catalog = Catalog::load(dir.path());
        assert_eq!(catalog.table(ContentType::Music).len(), 1);
        assert!(catalog.table(ContentType::Podcast).is_empty());
        assert_eq!(catalog.total_items(), 1);
    }

    #[test]
    fn test_combined_text_field_order() {
        let item = CatalogItem {
            content_type: ContentType::Reading,
            title: "The Untethered Soul".to_string(),
            creator: "Michael Singer".to_string(),
            url: "https://example.com/u".to_string(),
            mood_hint: "calm".to_string(),
            feature_text: "letting go of anxious thoughts".to_string(),
            tags: "mindfulness".to_string(),
        };

        assert_eq!(
            item.combined_text(),
            "The Untethered Soul Michael Singer mindfulness calm letting go of anxious thoughts"
        );
    }
}
