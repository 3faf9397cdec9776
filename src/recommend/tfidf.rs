//! Term-frequency / inverse-document-frequency vectorization.
//!
//! Small-corpus TF-IDF: raw term counts, smoothed IDF
//! (`ln((1 + n) / (1 + df)) + 1`) and L2-normalized rows. The vocabulary
//! is fit per table and per query, which is acceptable because the catalog
//! is a few hundred rows; this fit is the dominant cost if catalogs grow.

use std::collections::HashMap;

use crate::math::normalize_in_place;

/// Standard English stop words excluded from the vocabulary.
pub const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours",
];

/// Split text into lowercase word tokens of two or more characters,
/// excluding stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// A TF-IDF model fit over one document collection.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// Term -> vector index, in sorted term order for determinism
    vocabulary: HashMap<String, usize>,
    /// Smoothed IDF weight per vocabulary index
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Fit vocabulary and IDF weights on `documents`.
    pub fn fit(documents: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        let mut terms: Vec<&str> = tokenized
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        terms.sort_unstable();
        terms.dedup();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen = vec![false; vocabulary.len()];
            for token in tokens {
                if let Some(&index) = vocabulary.get(token) {
                    if !seen[index] {
                        seen[index] = true;
                        document_frequency[index] += 1;
                    }
                }
            }
        }

        let n = documents.len() as f32;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Vectorize `text` over the fitted vocabulary. Out-of-vocabulary
    /// terms contribute nothing; the result is L2-normalized.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }
        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }
        normalize_in_place(&mut vector);
        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}
