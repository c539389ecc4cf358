//! Loosely-typed upstream payload shapes.
//!
//! The recipe API treats nearly every field as optional and enforces no
//! schema, so everything here is deserialized permissively. These shapes
//! never leak past the normalizers in [`crate::search`].

use serde::Deserialize;

/// Paginated `complexSearch` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamSearchResponse {
    pub results: Vec<UpstreamSearchResult>,
    pub offset: Option<u32>,
    pub number: Option<u32>,
    pub total_results: Option<u64>,
}

/// One record of a search response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamSearchResult {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub nutrition: Option<UpstreamNutrition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamNutrition {
    pub nutrients: Vec<UpstreamNutrient>,
}

/// A single nutrient entry; upstream guarantees these three fields in
/// practice, but amounts occasionally arrive as null
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamNutrient {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: String,
}

/// Full recipe payload from `/recipes/{id}/information` and the
/// entries of `/recipes/random`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamRecipe {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub diets: Vec<String>,
    pub extended_ingredients: Vec<UpstreamIngredient>,
    pub analyzed_instructions: Vec<UpstreamInstructionBlock>,
    pub nutrition: Option<UpstreamNutrition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamIngredient {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

/// One block of `analyzedInstructions`; a recipe may carry several named
/// blocks but the UI renders only the first one's steps, in order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamInstructionBlock {
    pub name: Option<String>,
    pub steps: Vec<UpstreamStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamStep {
    pub number: Option<u32>,
    pub step: Option<String>,
}

/// Envelope of `/recipes/random`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamRandomResponse {
    pub recipes: Vec<UpstreamRecipe>,
}
