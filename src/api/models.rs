use serde::{Deserialize, Serialize};

/// Random recipes request parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomParams {
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// Mood request parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodParams {
    #[serde(default)]
    pub mood: Option<String>,
}

/// Meal plan request parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealPlanParams {
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub exclude: Option<String>,
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
    pub upstream: String,
}
