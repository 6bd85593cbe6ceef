// Similarity index and recommendation ranking

pub mod recommend;
pub mod tfidf;

// Re-exports
pub use recommend::{Recommendation, Recommender};
pub use tfidf::{SparseVector, TfidfIndex};
