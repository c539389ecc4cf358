use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::api::models::*;
use crate::search::criteria::{parse_non_negative, FilterCriteria, MOOD_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::search::detail::{self, RecipeDetail};
use crate::search::mood::Mood;
use crate::search::results::{self, SearchResultPage};
use crate::search::RawFacets;
use crate::{Error, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: crate::upstream::RecipeApiClient,
    pub settings: crate::config::Settings,
}

/// GET /recipes/search - Search recipes by facets
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(raw): Query<RawFacets>,
) -> Result<Json<SearchResultPage>> {
    debug!("Search request: {:?}", raw);

    // Without any facet this falls through to an unfiltered default search
    let criteria = FilterCriteria::from_facets(raw)?;

    let payload = state.client.search(&criteria).await?;

    Ok(Json(results::normalize_page(payload, &criteria)))
}

/// GET /recipes/:id - Get recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeDetail>> {
    debug!("Get recipe request: {}", id);

    // Validated before any upstream call
    let id = parse_recipe_id(&id)?;

    let payload = state.client.recipe_information(id).await?;

    Ok(Json(detail::normalize_detail(payload)?))
}

fn parse_recipe_id(raw: &str) -> Result<u64> {
    let id: i64 = raw
        .parse()
        .map_err(|_| Error::InvalidInput("Invalid recipe ID".to_string()))?;

    if id <= 0 {
        return Err(Error::InvalidInput("Invalid recipe ID".to_string()));
    }

    Ok(id as u64)
}

/// GET /recipes/random - Fetch random recipes
///
/// Upstream failures degrade to an empty list instead of an error body;
/// the UI treats this section as best-effort decoration.
pub async fn random_recipes(
    State(state): State<AppState>,
    Query(params): Query<RandomParams>,
) -> Result<Json<Vec<RecipeDetail>>> {
    debug!("Random recipes request: {:?}", params);

    let tags = params.tags.unwrap_or_default().trim().to_string();
    let number = match params.number.as_deref().map(str::trim) {
        None | Some("") => MOOD_PAGE_SIZE,
        Some(value) => {
            let n = parse_non_negative("number", value)?;
            if n == 0 {
                return Err(Error::InvalidInput("number must be positive".to_string()));
            }
            n.min(MAX_PAGE_SIZE)
        }
    };

    match state.client.random_recipes(&tags, number).await {
        Ok(recipes) => Ok(Json(detail::normalize_detail_list(recipes))),
        Err(e) => {
            warn!("Random recipes degraded to empty list: {}", e.log_safe());
            Ok(Json(Vec::new()))
        }
    }
}

/// GET /recipes/mood - Search by mood shortcut
pub async fn mood_recipes(
    State(state): State<AppState>,
    Query(params): Query<MoodParams>,
) -> Result<Json<SearchResultPage>> {
    debug!("Mood request: {:?}", params);

    let raw_mood = params.mood.unwrap_or_default();
    let mood = Mood::parse(raw_mood.trim())?;

    let criteria = mood.expand();
    let payload = state.client.search(&criteria).await?;

    Ok(Json(results::normalize_page(payload, &criteria)))
}

/// GET /mealplan - Generate a day meal plan
pub async fn meal_plan(
    State(state): State<AppState>,
    Query(params): Query<MealPlanParams>,
) -> Result<Json<serde_json::Value>> {
    debug!("Meal plan request: {:?}", params);

    let diet = params.diet.unwrap_or_default().trim().to_string();
    let exclude = params.exclude.unwrap_or_default().trim().to_string();

    let plan = state.client.meal_plan(&diet, &exclude).await?;

    Ok(Json(plan))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
///
/// Reports whether the upstream credential is configured; it does not ping
/// the upstream, which would burn request quota on every probe.
pub async fn readiness_check(State(_state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    Ok(Json(ReadinessResponse {
        ready: true,
        upstream: "configured".to_string(),
    }))
}
