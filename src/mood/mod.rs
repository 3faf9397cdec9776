//! Mood detection from free text.
//!
//! Detection is keyword-first: the priority-ordered tables in [`keywords`]
//! are walked and the first mood with a substring hit wins. When nothing
//! matches, a lexicon sentiment score decides between happy, sad and calm.

pub mod keywords;

pub use keywords::{keywords_for, MoodKeywords, MOOD_KEYWORDS, NEGATIVE_WORDS, POSITIVE_WORDS};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The 13 canonical moods the system recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Stressed,
    Anxious,
    Calm,
    Sad,
    Motivated,
    Tired,
    Lonely,
    Angry,
    Relaxed,
    Overwhelmed,
    Bored,
    Grateful,
}

impl MoodLabel {
    /// All canonical moods. The order is the keyword-match priority order.
    pub const ALL: [MoodLabel; 13] = [
        MoodLabel::Happy,
        MoodLabel::Stressed,
        MoodLabel::Anxious,
        MoodLabel::Calm,
        MoodLabel::Sad,
        MoodLabel::Motivated,
        MoodLabel::Tired,
        MoodLabel::Lonely,
        MoodLabel::Angry,
        MoodLabel::Relaxed,
        MoodLabel::Overwhelmed,
        MoodLabel::Bored,
        MoodLabel::Grateful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Stressed => "stressed",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Calm => "calm",
            MoodLabel::Sad => "sad",
            MoodLabel::Motivated => "motivated",
            MoodLabel::Tired => "tired",
            MoodLabel::Lonely => "lonely",
            MoodLabel::Angry => "angry",
            MoodLabel::Relaxed => "relaxed",
            MoodLabel::Overwhelmed => "overwhelmed",
            MoodLabel::Bored => "bored",
            MoodLabel::Grateful => "grateful",
        }
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown mood label: {0}")]
pub struct UnknownMood(String);

impl std::str::FromStr for MoodLabel {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        MoodLabel::ALL
            .into_iter()
            .find(|mood| mood.as_str() == lowered)
            .ok_or(UnknownMood(lowered))
    }
}

/// Which path produced a detected mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    /// A keyword table matched
    Keyword,
    /// The sentiment-polarity fallback decided
    Sentiment,
}

/// Map free text to a canonical mood. Never fails.
pub fn detect(text: &str) -> MoodLabel {
    detect_with_source(text).0
}

/// Map free text to a canonical mood, reporting which path decided.
///
/// Keyword tables are walked in priority order and the first substring hit
/// wins. With no hit, sentiment polarity picks happy (> 0.4), sad (< -0.3)
/// or calm. Most moods are reachable only via keywords.
pub fn detect_with_source(text: &str) -> (MoodLabel, DetectionSource) {
    let lowered = text.to_lowercase();

    for entry in MOOD_KEYWORDS {
        if entry.keywords.iter().any(|k| lowered.contains(k)) {
            return (entry.mood, DetectionSource::Keyword);
        }
    }

    let polarity = sentiment_polarity(&lowered);
    let mood = if polarity > 0.4 {
        MoodLabel::Happy
    } else if polarity < -0.3 {
        MoodLabel::Sad
    } else {
        MoodLabel::Calm
    };
    (mood, DetectionSource::Sentiment)
}

/// Lexicon sentiment polarity in [-1.0, 1.0].
///
/// Counts positive and negative lexicon hits over word tokens; zero hits
/// score 0.0 (neutral).
pub fn sentiment_polarity(text: &str) -> f32 {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let token = token.to_lowercase();
        if POSITIVE_WORDS.contains(&token.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    (positive as f32 - negative as f32) / total as f32
}
