use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Deserializer};

use crate::{api::handlers::AppState, error::Error, Result};

/// Deserialize optional string, treating empty strings as None
fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// Search page template
#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate {
    query: String,
    results: Vec<RecipeCardData>,
    total: usize,
}

#[derive(Clone)]
#[allow(dead_code)] // Fields are used by Askama templates
struct RecipeCardData {
    id: usize,
    name: String,
    cuisine: String,
    ingredients: String,
    instructions: String,
    score: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    q: Option<String>,
}

/// GET / - Ingredient search page
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let query = params.q.clone().unwrap_or_default();

    // If query is empty, show the bare form
    let results = if query.is_empty() {
        vec![]
    } else {
        let ranked = state
            .recommender
            .recommend(&query, state.settings.recommender.default_results);

        ranked
            .into_iter()
            .filter_map(|r| {
                let recipe = state.recommender.recipe(r.recipe_id)?;
                Some(RecipeCardData {
                    id: r.recipe_id,
                    name: recipe.name.clone(),
                    cuisine: recipe.cuisine.clone(),
                    ingredients: recipe.ingredients.clone(),
                    instructions: recipe.instructions.clone(),
                    score: format!("{:.1}%", r.score * 100.0),
                })
            })
            .collect()
    };

    let total = results.len();

    let template = SearchTemplate {
        query,
        results,
        total,
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

/// Recipe detail page template
#[derive(Template)]
#[template(path = "recipe.html")]
struct RecipeTemplate {
    recipe: RecipeData,
}

#[derive(Clone)]
#[allow(dead_code)] // Fields are used by Askama templates
struct RecipeData {
    id: usize,
    name: String,
    cuisine: String,
    ingredients: String,
    instructions: String,
}

/// GET /recipes/:id - Recipe detail page
pub async fn recipe_detail(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<impl IntoResponse> {
    let recipe = state
        .recommender
        .recipe(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;

    let template = RecipeTemplate {
        recipe: RecipeData {
            id,
            name: recipe.name.clone(),
            cuisine: recipe.cuisine.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        },
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

/// About page template
#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {}

/// GET /about - About page
pub async fn about_page() -> Result<impl IntoResponse> {
    let template = AboutTemplate {};
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}
