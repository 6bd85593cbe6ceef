// Recipe dataset loading and in-memory corpus

pub mod loader;
pub mod models;

// Re-exports
pub use loader::load_corpus;
pub use models::{Corpus, Recipe};
