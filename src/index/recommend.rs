use crate::corpus::{Corpus, Recipe};
use crate::index::tfidf::TfidfIndex;
use crate::nlp::Normalizer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A ranked corpus row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub recipe_id: usize,
    pub score: f32,
}

/// The query-serving context: corpus, fitted index, and normalizer,
/// built once at startup and shared read-only across requests.
pub struct Recommender {
    corpus: Corpus,
    index: TfidfIndex,
    normalizer: Box<dyn Normalizer>,
}

impl Recommender {
    /// Fit the similarity index over the corpus's normalized ingredient
    /// strings. Called once per process.
    pub fn new(corpus: Corpus, normalizer: Box<dyn Normalizer>) -> Self {
        let index = TfidfIndex::fit(&corpus.normalized_documents());
        info!(
            "Fitted similarity index: {} documents, {} terms",
            index.document_count(),
            index.vocabulary_size()
        );

        Self {
            corpus,
            index,
            normalizer,
        }
    }

    /// Rank the corpus against a raw ingredient query and return the top
    /// `top_n` rows by cosine similarity, highest first. Returns at most
    /// `min(top_n, corpus_len)` rows; ties keep corpus order.
    ///
    /// A query that normalizes to an empty string scores zero against
    /// every row; the result set is then the first rows in corpus order,
    /// degenerate but not an error.
    pub fn recommend(&self, raw_query: &str, top_n: usize) -> Vec<Recommendation> {
        let normalized = self.normalizer.normalize(raw_query);
        if normalized.is_empty() {
            debug!("Query normalized to empty string; similarity degenerates to zero");
        }

        let query_vector = self.index.transform(&normalized);

        let mut ranked: Vec<Recommendation> = self
            .index
            .scores(&query_vector)
            .into_iter()
            .enumerate()
            .map(|(recipe_id, score)| Recommendation { recipe_id, score })
            .collect();

        // Stable sort on descending score; equal scores keep corpus order
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(top_n);
        ranked
    }

    /// Look up a recipe by its corpus position
    pub fn recipe(&self, id: usize) -> Option<&Recipe> {
        self.corpus.get(id)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary_size(&self) -> usize {
        self.index.vocabulary_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::EnglishNormalizer;

    fn recipe(name: &str, ingredients: &str) -> Recipe {
        let normalizer = EnglishNormalizer::new();
        Recipe {
            name: name.to_string(),
            cuisine: "Unknown".to_string(),
            ingredients: ingredients.to_string(),
            normalized_ingredients: normalizer.normalize(ingredients),
            instructions: "Cook everything".to_string(),
        }
    }

    fn test_recommender() -> Recommender {
        let corpus = Corpus::new(vec![
            recipe("Tomato Rice", "tomato rice salt"),
            recipe("Potato Curry", "potato curry spices"),
            recipe("Garlic Chicken", "chicken garlic ginger oil"),
            recipe("Lemon Dal", "lentils lemon turmeric salt"),
            recipe("Veg Pulao", "rice carrot peas beans"),
        ]);
        Recommender::new(corpus, Box::new(EnglishNormalizer::new()))
    }

    #[test]
    fn test_example_scenario_tomato_rice() {
        let recommender = test_recommender();
        let results = recommender.recommend("tomato rice", 5);

        let top = recommender.recipe(results[0].recipe_id).unwrap();
        assert_eq!(top.name, "Tomato Rice");
    }

    #[test]
    fn test_reflexive_match_ranks_first() {
        let recommender = test_recommender();
        // Query with a corpus row's full ingredient text
        let results = recommender.recommend("chicken garlic ginger oil", 3);

        let top = recommender.recipe(results[0].recipe_id).unwrap();
        assert_eq!(top.name, "Garlic Chicken");
    }

    #[test]
    fn test_never_returns_more_than_corpus_size() {
        let recommender = test_recommender();
        let results = recommender.recommend("rice", 100);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_respects_requested_count() {
        let recommender = test_recommender();
        let results = recommender.recommend("rice", 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_scores_descend() {
        let recommender = test_recommender();
        let results = recommender.recommend("rice salt tomato", 5);

        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_empty_query_degenerates_without_error() {
        let recommender = test_recommender();
        let results = recommender.recommend("", 3);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.score == 0.0));
        // Ties keep corpus order
        assert_eq!(results[0].recipe_id, 0);
        assert_eq!(results[1].recipe_id, 1);
    }

    #[test]
    fn test_stopword_only_query_degenerates_without_error() {
        let recommender = test_recommender();
        let results = recommender.recommend("the and of", 2);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0.0));
    }
}
