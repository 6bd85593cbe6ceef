use std::collections::{HashMap, HashSet};

/// Sparse term-weight vector: (term index, weight) pairs sorted by term
/// index, scaled to unit length so cosine similarity is a dot product.
pub type SparseVector = Vec<(usize, f32)>;

/// TF-IDF weighted term index over a fixed document collection.
///
/// The vocabulary and IDF weights are fixed at `fit` time; queries are
/// projected into the same space with `transform`, where terms absent
/// from the vocabulary contribute zero weight.
pub struct TfidfIndex {
    /// term → dimension index
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f32>,
    /// One unit-length vector per fitted document, in input order
    doc_vectors: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Build vocabulary, IDF weights, and document vectors from
    /// already-normalized documents. Called once per process.
    pub fn fit(documents: &[&str]) -> Self {
        let n = documents.len() as f32;

        let tokenized: Vec<Vec<&str>> = documents
            .iter()
            .map(|d| d.split_whitespace().collect())
            .collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            for term in unique {
                match vocabulary.get(term) {
                    Some(&idx) => doc_freq[idx] += 1,
                    None => {
                        vocabulary.insert(term.to_string(), doc_freq.len());
                        doc_freq.push(1);
                    }
                }
            }
        }

        // Smoothed IDF: terms in every document still carry some weight
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| (n / df as f32).ln() + 1.0)
            .collect();

        let doc_vectors = tokenized
            .iter()
            .map(|tokens| weigh_tokens(tokens, &vocabulary, &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    /// Project a normalized query string into the fitted vector space.
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        weigh_tokens(&tokens, &self.vocabulary, &self.idf)
    }

    /// Cosine similarity of the query against every fitted document,
    /// in document order
    pub fn scores(&self, query: &SparseVector) -> Vec<f32> {
        self.doc_vectors
            .iter()
            .map(|doc| dot(query, doc))
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.doc_vectors.len()
    }
}

/// Term-frequency counts weighted by IDF, unit-normalized
fn weigh_tokens(tokens: &[&str], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> SparseVector {
    let mut counts: HashMap<usize, f32> = HashMap::new();
    for token in tokens {
        if let Some(&idx) = vocabulary.get(*token) {
            *counts.entry(idx).or_insert(0.0) += 1.0;
        }
    }

    let mut vector: SparseVector = counts
        .into_iter()
        .map(|(idx, tf)| (idx, tf * idf[idx]))
        .collect();
    vector.sort_unstable_by_key(|&(idx, _)| idx);

    normalize(&mut vector);
    vector
}

/// Scale to unit length; zero vectors stay zero
fn normalize(v: &mut SparseVector) {
    let norm: f32 = v.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in v.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two index-sorted sparse vectors
fn dot(a: &SparseVector, b: &SparseVector) -> f32 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_builds_vocabulary() {
        let index = TfidfIndex::fit(&["tomato rice salt", "potato curry spice"]);
        assert_eq!(index.vocabulary_size(), 6);
        assert_eq!(index.document_count(), 2);
    }

    #[test]
    fn test_transform_known_terms() {
        let index = TfidfIndex::fit(&["tomato rice salt", "potato curry spice"]);
        let vector = index.transform("tomato rice");
        assert_eq!(vector.len(), 2);
        assert!(vector.iter().all(|&(_, w)| w > 0.0));
    }

    #[test]
    fn test_transform_unknown_terms_contribute_nothing() {
        let index = TfidfIndex::fit(&["tomato rice salt"]);
        let vector = index.transform("quinoa seaweed");
        assert!(vector.is_empty());
    }

    #[test]
    fn test_transform_empty_string() {
        let index = TfidfIndex::fit(&["tomato rice salt"]);
        assert!(index.transform("").is_empty());
    }

    #[test]
    fn test_document_vectors_are_unit_length() {
        let index = TfidfIndex::fit(&["tomato rice salt", "potato curry"]);
        for doc in &index.doc_vectors {
            let norm: f32 = doc.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_scores_reflexive_document_is_highest() {
        let index = TfidfIndex::fit(&[
            "tomato rice salt",
            "potato curry spice",
            "chicken garlic ginger",
        ]);
        let query = index.transform("tomato rice salt");
        let scores = index.scores(&query);

        assert!((scores[0] - 1.0).abs() < 1e-5);
        assert!(scores[0] > scores[1]);
        assert!(scores[0] > scores[2]);
    }

    #[test]
    fn test_scores_are_in_document_order() {
        let index = TfidfIndex::fit(&["tomato", "potato"]);
        let query = index.transform("potato");
        let scores = index.scores(&query);
        assert_eq!(scores.len(), 2);
        assert!(scores[1] > scores[0]);
    }
}
