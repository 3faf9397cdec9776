//! Request/response types for recommendation and mood detection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ContentType;
use crate::mood::{DetectionSource, MoodLabel};
use crate::recommend::{Recommendation, RecommendationMode};

/// Request for recommendations.
///
/// Exactly one of `mood` and `text` must be present; `text` is resolved to
/// a canonical mood by the detector before matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Session to reuse; a new one is created when absent
    #[serde(default)]
    pub session_id: Option<Uuid>,

    /// Canonical mood label
    #[serde(default)]
    pub mood: Option<MoodLabel>,

    /// Free-text mood description
    #[serde(default)]
    pub text: Option<String>,

    /// Which catalog table to recommend from
    pub content_type: ContentType,

    /// Number of results; the configured default applies when absent
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Response with a mode-tagged recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub session_id: Uuid,
    pub mood: MoodLabel,
    /// Present when the mood was resolved from free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_source: Option<DetectionSource>,
    pub mode: RecommendationMode,
    pub items: Vec<RecommendedItem>,
}

/// One recommended item as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedItem {
    pub content_type: ContentType,
    pub title: String,
    pub creator: String,
    pub url: String,
    /// Display percentage; absent on the tag-match path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
}

impl From<&Recommendation> for RecommendedItem {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            content_type: recommendation.item.content_type,
            title: recommendation.item.title.clone(),
            creator: recommendation.item.creator.clone(),
            url: recommendation.item.url.clone(),
            similarity: recommendation.similarity,
        }
    }
}

/// Request to detect a mood from free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

/// Response from mood detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub mood: MoodLabel,
    pub source: DetectionSource,
}

/// Info about a single canonical mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodInfo {
    pub id: String,
    pub keywords: Vec<String>,
}

/// Response listing the canonical moods in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMoodsResponse {
    pub moods: Vec<MoodInfo>,
    pub count: usize,
}

/// Response with per-table catalog sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatsResponse {
    pub tables: HashMap<String, usize>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_defaults() {
        let json = r#"{"content_type": "music", "mood": "calm"}"#;
        let req: RecommendRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.content_type, ContentType::Music);
        assert_eq!(req.mood, Some(MoodLabel::Calm));
        assert!(req.session_id.is_none());
        assert!(req.text.is_none());
        assert!(req.top_n.is_none());
    }

    #[test]
    fn test_recommend_request_with_text() {
        let json = r#"{"content_type": "reading", "text": "long stressful week", "top_n": 3}"#;
        let req: RecommendRequest = serde_json::from_str(json).unwrap();

        assert!(req.mood.is_none());
        assert_eq!(req.text.as_deref(), Some("long stressful week"));
        assert_eq!(req.top_n, Some(3));
    }

    #[test]
    fn test_recommended_item_similarity_skipped_when_absent() {
        let item = RecommendedItem {
            content_type: ContentType::Music,
            title: "T".to_string(),
            creator: "C".to_string(),
            url: "https://example.com/t".to_string(),
            similarity: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("similarity"));
    }

    #[test]
    fn test_recommend_response_serialization() {
        let response = RecommendResponse {
            session_id: Uuid::nil(),
            mood: MoodLabel::Stressed,
            mood_source: Some(DetectionSource::Keyword),
            mode: RecommendationMode::RandomFromTagMatch,
            items: vec![],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("stressed"));
        assert!(json.contains("random_from_tag_match"));

        let decoded: RecommendResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.mood, MoodLabel::Stressed);
        assert_eq!(decoded.mode, RecommendationMode::RandomFromTagMatch);
    }
}
