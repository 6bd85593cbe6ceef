use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{api::models::*, index::Recommender, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub settings: crate::config::Settings,
}

/// GET /api/recommend - Rank recipes against an ingredient query
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>> {
    debug!("Recommend request: {:?}", params);

    let limit = params
        .limit
        .unwrap_or(state.settings.recommender.default_results)
        .min(state.settings.recommender.max_results);

    let ranked = state.recommender.recommend(&params.q, limit);

    let results: Vec<RecipeCard> = ranked
        .into_iter()
        .filter_map(|r| {
            let recipe = state.recommender.recipe(r.recipe_id)?;
            Some(RecipeCard {
                id: r.recipe_id,
                name: recipe.name.clone(),
                cuisine: recipe.cuisine.clone(),
                score: r.score,
            })
        })
        .collect();

    let total = results.len();

    Ok(Json(RecommendResponse {
        query: params.q,
        results,
        total,
    }))
}

/// GET /api/recipes/:id - Get recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<Json<RecipeDetail>> {
    debug!("Get recipe request: {}", id);

    let recipe = state
        .recommender
        .recipe(id)
        .ok_or_else(|| crate::Error::NotFound(format!("Recipe {id} not found")))?;

    Ok(Json(RecipeDetail {
        id,
        name: recipe.name.clone(),
        cuisine: recipe.cuisine.clone(),
        ingredients: recipe.ingredients.clone(),
        instructions: recipe.instructions.clone(),
    }))
}

/// GET /api/stats - Get corpus statistics
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    debug!("Get stats request");

    Ok(Json(Stats {
        total_recipes: state.recommender.corpus().len(),
        vocabulary_size: state.recommender.vocabulary_size(),
        cuisines: state.recommender.corpus().cuisine_count(),
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    // Corpus and index are built before the server starts; if the state
    // exists they are ready
    let corpus_ready = !state.recommender.corpus().is_empty();
    let index_ready = state.recommender.vocabulary_size() > 0;

    Ok(Json(ReadinessResponse {
        ready: corpus_ready && index_ready,
        corpus: if corpus_ready { "ok" } else { "error" }.to_string(),
        index: if index_ready { "ok" } else { "error" }.to_string(),
    }))
}
