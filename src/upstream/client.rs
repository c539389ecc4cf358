use crate::error::{Error, Result};
use crate::search::criteria::FilterCriteria;
use crate::upstream::{
    config::UpstreamConfig,
    models::{UpstreamRandomResponse, UpstreamRecipe, UpstreamSearchResponse},
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

/// Recipe API client
///
/// One upstream HTTP request per call; no retries, no caching. All state
/// is per-call, so the client is safely shared across concurrent handlers.
#[derive(Clone)]
pub struct RecipeApiClient {
    client: Client,
    config: UpstreamConfig,
}

impl RecipeApiClient {
    /// Create a new recipe API client
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Plateful/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Make a GET request to the recipe API
    async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        // Log the path only; the full URL carries the API key
        debug!("Recipe API request: GET {}", path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                error!("Recipe API transport failure: {}", e.without_url());
                Error::UpstreamUnavailable
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("Recipe API error: {} on {}", status, path);

            return Err(Error::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| Error::UpstreamError {
            status: status.as_u16(),
            message: format!("Failed to parse recipe API response: {}", e.without_url()),
        })
    }

    /// Query parameters for a complex search.
    ///
    /// Exactly the non-empty fields of the criteria plus fixed constants;
    /// an empty facet is omitted entirely, never sent as an empty string.
    fn search_params(&self, criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", self.config.api_key.clone()),
            ("number", criteria.number.to_string()),
            ("offset", criteria.offset.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("sort", criteria.sort.as_str().to_string()),
            ("sortDirection", criteria.sort_direction.as_str().to_string()),
        ];

        if !criteria.query.is_empty() {
            params.push(("query", criteria.query.clone()));
        }
        if !criteria.cuisine.is_empty() {
            params.push(("cuisine", criteria.cuisine.clone()));
        }
        if !criteria.diet.is_empty() {
            params.push(("diet", criteria.diet.clone()));
        }
        if !criteria.meal_type.is_empty() {
            params.push(("type", criteria.meal_type.clone()));
        }
        if !criteria.intolerances.is_empty() {
            params.push(("intolerances", criteria.intolerances.clone()));
        }
        if let Some(max_ready_time) = criteria.max_ready_time {
            params.push(("maxReadyTime", max_ready_time.to_string()));
        }

        params
    }

    /// Run a search against the upstream catalog
    pub async fn search(&self, criteria: &FilterCriteria) -> Result<UpstreamSearchResponse> {
        let params = self.search_params(criteria);
        self.get("/recipes/complexSearch", &params).await
    }

    /// Fetch one recipe with nutrition included.
    ///
    /// An upstream 404 means the id was syntactically fine but names no
    /// recipe; callers render that differently from a transport failure.
    pub async fn recipe_information(&self, id: u64) -> Result<UpstreamRecipe> {
        let params = vec![
            ("apiKey", self.config.api_key.clone()),
            ("includeNutrition", "true".to_string()),
        ];

        match self.get(&format!("/recipes/{id}/information"), &params).await {
            Err(Error::UpstreamError { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(Error::NotFound(format!("Recipe {id} not found")))
            }
            other => other,
        }
    }

    /// Fetch a batch of random recipes, optionally constrained by tags
    pub async fn random_recipes(&self, tags: &str, number: u32) -> Result<Vec<UpstreamRecipe>> {
        let mut params = vec![
            ("apiKey", self.config.api_key.clone()),
            ("number", number.to_string()),
        ];

        if !tags.is_empty() {
            params.push(("tags", tags.to_string()));
        }

        let envelope: UpstreamRandomResponse = self.get("/recipes/random", &params).await?;
        Ok(envelope.recipes)
    }

    /// Generate a day meal plan, optionally constrained by diet and
    /// excluded ingredients. The payload is passed through untyped; the UI
    /// renders it directly.
    pub async fn meal_plan(&self, diet: &str, exclude: &str) -> Result<serde_json::Value> {
        let mut params = vec![
            ("apiKey", self.config.api_key.clone()),
            ("timeFrame", "day".to_string()),
        ];

        if !diet.is_empty() {
            params.push(("diet", diet.to_string()));
        }
        if !exclude.is_empty() {
            params.push(("exclude", exclude.to_string()));
        }

        self.get("/mealplanner/generate", &params).await
    }
}
