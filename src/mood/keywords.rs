//! Keyword and lexicon tables for mood detection.
//!
//! Keyword matching is a priority walk: `MOOD_KEYWORDS` is ordered, and the
//! first mood with any keyword contained in the lowercased input wins.

use crate::mood::MoodLabel;

/// A mood with the phrases that map free text onto it.
#[derive(Debug, Clone)]
pub struct MoodKeywords {
    /// Canonical label
    pub mood: MoodLabel,
    /// Lowercase phrases matched as substrings of the input
    pub keywords: &'static [&'static str],
}

pub const KEYWORDS_HAPPY: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Happy,
    keywords: &[
        "happy", "joyful", "joy", "cheerful", "excited", "great day", "wonderful", "glad",
        "delighted", "upbeat",
    ],
};

pub const KEYWORDS_STRESSED: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Stressed,
    keywords: &[
        "stressed", "stress", "under pressure", "deadline", "overloaded", "frazzled", "tense",
    ],
};

pub const KEYWORDS_ANXIOUS: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Anxious,
    keywords: &[
        "anxious", "anxiety", "worried", "worry", "nervous", "on edge", "uneasy", "panicking",
        "panic",
    ],
};

pub const KEYWORDS_CALM: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Calm,
    keywords: &["calm", "peaceful", "serene", "tranquil", "at ease", "centered"],
};

pub const KEYWORDS_SAD: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Sad,
    keywords: &[
        "sad", "unhappy", "feeling down", "depressed", "heartbroken", "crying", "tearful",
        "miserable", "gloomy",
    ],
};

pub const KEYWORDS_MOTIVATED: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Motivated,
    keywords: &[
        "motivated", "driven", "productive", "ambitious", "determined", "energized", "pumped",
    ],
};

pub const KEYWORDS_TIRED: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Tired,
    keywords: &[
        "tired", "exhausted", "sleepy", "fatigued", "drained", "weary", "worn out", "burned out",
    ],
};

pub const KEYWORDS_LONELY: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Lonely,
    keywords: &["lonely", "alone", "isolated", "disconnected", "left out"],
};

pub const KEYWORDS_ANGRY: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Angry,
    keywords: &[
        "angry", "furious", "mad at", "irritated", "annoyed", "frustrated", "fed up", "resentful",
    ],
};

pub const KEYWORDS_RELAXED: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Relaxed,
    keywords: &["relaxed", "chill", "laid back", "mellow", "easygoing", "unwinding", "unwind"],
};

pub const KEYWORDS_OVERWHELMED: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Overwhelmed,
    keywords: &[
        "overwhelmed", "too much", "swamped", "buried", "drowning in", "can't keep up",
        "cant keep up",
    ],
};

pub const KEYWORDS_BORED: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Bored,
    keywords: &["bored", "boring", "nothing to do", "restless", "uninspired", "dull day"],
};

pub const KEYWORDS_GRATEFUL: MoodKeywords = MoodKeywords {
    mood: MoodLabel::Grateful,
    keywords: &["grateful", "thankful", "blessed", "appreciative", "appreciate"],
};

/// Priority-ordered keyword tables: first match wins.
pub const MOOD_KEYWORDS: &[MoodKeywords] = &[
    KEYWORDS_HAPPY,
    KEYWORDS_STRESSED,
    KEYWORDS_ANXIOUS,
    KEYWORDS_CALM,
    KEYWORDS_SAD,
    KEYWORDS_MOTIVATED,
    KEYWORDS_TIRED,
    KEYWORDS_LONELY,
    KEYWORDS_ANGRY,
    KEYWORDS_RELAXED,
    KEYWORDS_OVERWHELMED,
    KEYWORDS_BORED,
    KEYWORDS_GRATEFUL,
];

/// Find the keyword table for a mood.
pub fn keywords_for(mood: MoodLabel) -> &'static [&'static str] {
    MOOD_KEYWORDS
        .iter()
        .find(|entry| entry.mood == mood)
        .map(|entry| entry.keywords)
        .unwrap_or(&[])
}

/// Word lists for the sentiment-polarity fallback. Single words matched
/// against whitespace/punctuation-split tokens, not substrings.
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "nice", "love", "loved", "lovely", "enjoy", "enjoyed", "beautiful", "amazing",
    "awesome", "fantastic", "pleasant", "delightful", "fine", "fun", "smile", "smiling", "laugh",
    "bright", "sunny", "warm", "sweet", "best", "better", "win", "winning",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "hated", "worst", "worse", "ugly", "pain",
    "painful", "hurt", "hurting", "sick", "ill", "fail", "failed", "failing", "lost", "losing",
    "cry", "dark", "cold", "broken", "rough", "grim",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_keywords() {
        assert_eq!(MOOD_KEYWORDS.len(), MoodLabel::ALL.len());
        for mood in MoodLabel::ALL {
            assert!(
                !keywords_for(mood).is_empty(),
                "mood {mood} has no keywords"
            );
        }
    }

    #[test]
    fn test_priority_order_matches_canonical_order() {
        let table_order: Vec<MoodLabel> = MOOD_KEYWORDS.iter().map(|entry| entry.mood).collect();
        assert_eq!(table_order, MoodLabel::ALL.to_vec());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for entry in MOOD_KEYWORDS {
            for keyword in entry.keywords {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword {keyword} must be lowercase"
                );
            }
        }
    }

    #[test]
    fn test_lexicons_do_not_overlap() {
        for word in POSITIVE_WORDS {
            assert!(!NEGATIVE_WORDS.contains(word), "{word} in both lexicons");
        }
    }
}
