//! Mood-to-content matching.
//!
//! Two result modes, deliberately kept distinct:
//!
//! - tag match: items whose `mood_hint` contains the mood label are sampled
//!   at random, unranked;
//! - similarity: with no tag hits, the whole table is ranked by TF-IDF
//!   cosine similarity against the mood label, scores rescaled into a
//!   display band.

pub mod tfidf;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, CatalogTable};
use crate::config::RecommendConfig;
use crate::math::cosine_similarity;
use crate::mood::MoodLabel;
use tfidf::TfidfModel;

/// How a recommendation set was produced. Callers must know: the tag path
/// is a random, unranked sample; the similarity path is deterministic and
/// ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationMode {
    RankedBySimilarity,
    RandomFromTagMatch,
}

/// One recommended item. `similarity` is a display percentage present only
/// on the similarity path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub item: CatalogItem,
    pub similarity: Option<f32>,
}

/// A mode-tagged result set for one query.
#[derive(Debug, Clone)]
pub struct RecommendationSet {
    pub mode: RecommendationMode,
    pub entries: Vec<Recommendation>,
}

/// The matching engine.
///
/// Similarity scores are cosine values scaled to percentages; when the
/// maximum observed score is positive the whole column is rescaled into
/// `[display_floor, display_ceiling]`. The rescale is a positive affine
/// transform, so ordering is preserved; the displayed number is no longer
/// a faithful absolute similarity.
#[derive(Debug, Clone)]
pub struct Recommender {
    pub display_floor: f32,
    pub display_ceiling: f32,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            display_floor: 60.0,
            display_ceiling: 100.0,
        }
    }
}

impl Recommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RecommendConfig) -> Self {
        Self {
            display_floor: config.display_floor,
            display_ceiling: config.display_ceiling,
        }
    }

    /// Produce at most `top_n` recommendations from `table` for `mood`.
    ///
    /// Empty table -> empty set. Tag hits short-circuit into a random
    /// sample of the filtered items; otherwise the whole table is
    /// similarity-ranked, so a nonempty table always yields results.
    pub fn recommend(
        &self,
        table: &CatalogTable,
        mood: MoodLabel,
        top_n: usize,
    ) -> RecommendationSet {
        if table.is_empty() {
            return RecommendationSet {
                mode: RecommendationMode::RankedBySimilarity,
                entries: Vec::new(),
            };
        }

        if let Some(set) = self.sample_tag_matches(table, mood, top_n) {
            return set;
        }

        self.rank_by_similarity(table, mood, top_n)
    }

    /// The tag path: case-insensitive substring filter on `mood_hint`,
    /// then a uniform random sample. `None` when nothing matched.
    fn sample_tag_matches(
        &self,
        table: &CatalogTable,
        mood: MoodLabel,
        top_n: usize,
    ) -> Option<RecommendationSet> {
        let needle = mood.as_str();
        let matched: Vec<&CatalogItem> = table
            .items()
            .iter()
            .filter(|item| item.mood_hint.to_lowercase().contains(needle))
            .collect();

        if matched.is_empty() {
            return None;
        }

        let mut rng = rand::rng();
        let entries = matched
            .choose_multiple(&mut rng, top_n.min(matched.len()))
            .map(|item| Recommendation {
                item: (*item).clone(),
                similarity: None,
            })
            .collect();

        Some(RecommendationSet {
            mode: RecommendationMode::RandomFromTagMatch,
            entries,
        })
    }

    /// The similarity path over the whole table.
    fn rank_by_similarity(
        &self,
        table: &CatalogTable,
        mood: MoodLabel,
        top_n: usize,
    ) -> RecommendationSet {
        let documents: Vec<String> = table
            .items()
            .iter()
            .map(CatalogItem::combined_text)
            .collect();

        let model = TfidfModel::fit(&documents);
        let query = model.transform(mood.as_str());

        let mut scores: Vec<f32> = documents
            .iter()
            .map(|document| cosine_similarity(&query, &model.transform(document)) * 100.0)
            .collect();

        self.rescale_into_band(&mut scores);

        let mut ranked: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();
        // Stable sort keeps catalog order for tied scores.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_n);

        let entries = ranked
            .into_iter()
            .map(|(index, score)| Recommendation {
                item: table.items()[index].clone(),
                similarity: Some(score),
            })
            .collect();

        RecommendationSet {
            mode: RecommendationMode::RankedBySimilarity,
            entries,
        }
    }

    /// Affine rescale of the whole score column into the display band,
    /// applied only when the maximum score is positive. All-zero columns
    /// are left alone.
    fn rescale_into_band(&self, scores: &mut [f32]) {
        let max = scores.iter().copied().fold(0.0f32, f32::max);
        if max <= 0.0 {
            return;
        }
        let span = self.display_ceiling - self.display_floor;
        for score in scores {
            *score = self.display_floor + span * (*score / max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ContentType;

    fn item(title: &str, mood_hint: &str, feature_text: &str) -> CatalogItem {
        CatalogItem {
            content_type: ContentType::Music,
            title: title.to_string(),
            creator: "Test Artist".to_string(),
            url: format!("https://example.com/{title}"),
            mood_hint: mood_hint.to_string(),
            feature_text: feature_text.to_string(),
            tags: String::new(),
        }
    }

    fn table(items: Vec<CatalogItem>) -> CatalogTable {
        CatalogTable::new(ContentType::Music, items)
    }

    #[test]
    fn test_empty_table_yields_empty_set() {
        let set = Recommender::new().recommend(
            &CatalogTable::empty(ContentType::Music),
            MoodLabel::Happy,
            5,
        );
        assert!(set.entries.is_empty());
    }

    #[test]
    fn test_tag_match_short_circuits_into_random_mode() {
        let t = table(vec![
            item("A", "Stressed, tense", "slow ambient"),
            item("B", "happy", "upbeat pop"),
            item("C", "", "neutral filler text"),
        ]);

        let set = Recommender::new().recommend(&t, MoodLabel::Stressed, 5);
        assert_eq!(set.mode, RecommendationMode::RandomFromTagMatch);
        assert_eq!(set.entries.len(), 1);
        assert_eq!(set.entries[0].item.title, "A");
        assert!(set.entries[0].similarity.is_none());
    }

    #[test]
    fn test_tag_match_returns_subset_of_filtered_items() {
        let t = table(vec![
            item("A", "calm evening", ""),
            item("B", "calm focus", ""),
            item("C", "calm sleep", ""),
            item("D", "angry", ""),
        ]);

        for _ in 0..10 {
            let set = Recommender::new().recommend(&t, MoodLabel::Calm, 2);
            assert_eq!(set.mode, RecommendationMode::RandomFromTagMatch);
            assert_eq!(set.entries.len(), 2);
            for entry in &set.entries {
                assert!(["A", "B", "C"].contains(&entry.item.title.as_str()));
            }
        }
    }

    #[test]
    fn test_no_tag_match_falls_back_to_similarity_over_whole_table() {
        let t = table(vec![
            item("A", "happy", "joyful bright celebration"),
            item("B", "", "grateful thankful reflection journal"),
        ]);

        // No mood_hint contains "grateful"; similarity ranks the whole
        // table and the item whose text mentions it wins.
        let set = Recommender::new().recommend(&t, MoodLabel::Grateful, 1);
        assert_eq!(set.mode, RecommendationMode::RankedBySimilarity);
        assert_eq!(set.entries.len(), 1);
        assert_eq!(set.entries[0].item.title, "B");
        assert!(set.entries[0].similarity.is_some());
    }

    #[test]
    fn test_similarity_results_sorted_descending() {
        let t = table(vec![
            item("A", "", "calm ambient drift"),
            item("B", "", "workout power sprint"),
            item("C", "", "calm slow peaceful calm"),
        ]);

        let set = Recommender::new().recommend(&t, MoodLabel::Calm, 3);
        assert_eq!(set.mode, RecommendationMode::RankedBySimilarity);
        let scores: Vec<f32> = set
            .entries
            .iter()
            .map(|e| e.similarity.unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_similarity_path_is_deterministic() {
        let t = table(vec![
            item("A", "", "calm ambient drift"),
            item("B", "", "loud fast workout"),
            item("C", "", "peaceful calm meditation"),
        ]);

        let recommender = Recommender::new();
        let first = recommender.recommend(&t, MoodLabel::Calm, 3);
        let second = recommender.recommend(&t, MoodLabel::Calm, 3);
        let titles = |set: &RecommendationSet| -> Vec<String> {
            set.entries.iter().map(|e| e.item.title.clone()).collect()
        };
        assert_eq!(titles(&first), titles(&second));
    }

    #[test]
    fn test_unmatched_mood_still_fills_top_n() {
        // Nothing matches "lonely" by tag or by text; scores tie at zero
        // and the stable sort keeps catalog order.
        let t = table(vec![
            item("A", "", "ocean waves recording"),
            item("B", "", "forest rain sounds"),
            item("C", "", "city traffic noise"),
        ]);

        let set = Recommender::new().recommend(&t, MoodLabel::Lonely, 2);
        assert_eq!(set.entries.len(), 2);
        assert_eq!(set.entries[0].item.title, "A");
        assert_eq!(set.entries[1].item.title, "B");
        assert_eq!(set.entries[0].similarity, Some(0.0));
    }

    #[test]
    fn test_top_n_larger_than_table_returns_whole_table() {
        let t = table(vec![
            item("A", "", "calm ambient"),
            item("B", "", "bright upbeat"),
        ]);

        let set = Recommender::new().recommend(&t, MoodLabel::Calm, 50);
        assert_eq!(set.entries.len(), 2);
    }

    #[test]
    fn test_rescale_preserves_order_and_band() {
        let recommender = Recommender::new();
        let mut scores = vec![10.0, 40.0, 20.0, 0.0];
        recommender.rescale_into_band(&mut scores);

        // Monotonic: 40 > 20 > 10 > 0 stays that way after rescale.
        assert!(scores[1] > scores[2]);
        assert!(scores[2] > scores[0]);
        assert!(scores[0] > scores[3]);
        // Band: max maps to the ceiling, zero to the floor.
        assert!((scores[1] - 100.0).abs() < 1e-5);
        assert!((scores[3] - 60.0).abs() < 1e-5);
        for score in scores {
            assert!((60.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn test_rescale_skips_all_zero_column() {
        let recommender = Recommender::new();
        let mut scores = vec![0.0, 0.0, 0.0];
        recommender.rescale_into_band(&mut scores);
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
    }
}
