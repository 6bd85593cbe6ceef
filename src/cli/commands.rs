use crate::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;

/// Search a running server for recipe suggestions
pub async fn search(server_url: &str, ingredients: &str, limit: Option<usize>) -> Result<()> {
    let client = Client::new();

    // Build query params
    let mut url = format!(
        "{}/api/recommend?q={}",
        server_url,
        urlencoding::encode(ingredients)
    );

    if let Some(limit) = limit {
        url.push_str(&format!("&limit={limit}"));
    }

    // Make request
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(response.error_for_status().unwrap_err()));
    }

    let results: RecommendResponse = response.json().await?;

    // Display results
    print_results(&results);

    Ok(())
}

/// Load the dataset locally and print corpus statistics
pub fn validate(path: impl AsRef<Path>) -> Result<()> {
    use crate::corpus::load_corpus;
    use crate::index::Recommender;
    use crate::nlp::EnglishNormalizer;

    let path = path.as_ref();

    let normalizer = EnglishNormalizer::new();
    let corpus = load_corpus(path, &normalizer)?;
    let recipes = corpus.len();
    let cuisines = corpus.cuisine_count();

    let recommender = Recommender::new(corpus, Box::new(normalizer));

    println!("\x1b[32m\u{2713}\x1b[0m Valid dataset: {}", path.display());
    println!("  Recipes: {recipes}");
    println!("  Cuisines: {cuisines}");
    println!("  Vocabulary: {} terms", recommender.vocabulary_size());

    Ok(())
}

// Helper functions

fn print_results(results: &RecommendResponse) {
    if results.results.is_empty() {
        println!("No recipes found");
        return;
    }

    println!("\nFound {} suggestions:\n", results.total);
    println!("{:<5} {:<40} {:<20} {:<8}", "ID", "Name", "Cuisine", "Match");
    println!("{}", "-".repeat(75));

    for recipe in &results.results {
        println!(
            "{:<5} {:<40} {:<20} {:<8}",
            recipe.id,
            truncate(&recipe.name, 38),
            truncate(&recipe.cuisine, 18),
            format!("{:.2}", recipe.score)
        );
    }

    println!("\nFor details: pantry's web UI at /recipes/<ID>");
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

// Response types (matching API models)

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    results: Vec<RecipeCard>,
    total: usize,
}

#[derive(Debug, Deserialize)]
struct RecipeCard {
    id: usize,
    name: String,
    cuisine: String,
    score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long recipe name", 10), "a very ...");
    }
}
