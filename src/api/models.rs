use serde::{Deserialize, Serialize};

/// Recommendation request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub q: String,
    /// Result count; falls back to the configured default
    pub limit: Option<usize>,
}

/// Recommendation response
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub results: Vec<RecipeCard>,
    pub total: usize,
}

/// Recipe card for recommendation results
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCard {
    pub id: usize,
    pub name: String,
    pub cuisine: String,
    pub score: f32,
}

/// Full recipe details
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: usize,
    pub name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub instructions: String,
}

/// System statistics
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_recipes: usize,
    pub vocabulary_size: usize,
    pub cuisines: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub corpus: String,
    pub index: String,
}
