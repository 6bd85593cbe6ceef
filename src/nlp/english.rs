use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::Normalizer;

/// Common English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had",
            "has", "have", "if", "in", "into", "is", "it", "its", "no", "not", "of", "on",
            "or", "our", "out", "so", "some", "such", "than", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "up", "was", "we", "were", "will", "with",
            "you", "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// English text normalizer: lowercase, strip punctuation, drop stopwords,
/// reduce tokens to base form with a Snowball stemmer.
pub struct EnglishNormalizer {
    stemmer: Stemmer,
}

impl EnglishNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for EnglishNormalizer {
    fn normalize(&self, text: &str) -> String {
        let stops = stop_words();
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .filter(|s| !stops.contains(s))
            .map(|s| self.stemmer.stem(s).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
