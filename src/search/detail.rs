use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::search::results::{normalize_nutrients, Difficulty, Nutrient};
use crate::upstream::models::UpstreamRecipe;
use crate::utils::sanitize::sanitize_html;

/// Full recipe view, constructed fresh per request and never cached
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub summary_html: String,
    pub diets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_diet: Option<String>,
    pub nutrients: Vec<Nutrient>,
    pub ingredients: Vec<Ingredient>,
    pub instruction_steps: Vec<InstructionStep>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructionStep {
    pub number: u32,
    pub text: String,
}

/// Zero servings would divide-by-zero any downstream scaling, so it is
/// normalized to one; an absent value stays absent
fn normalize_servings(raw: Option<u32>) -> Option<u32> {
    raw.map(|servings| servings.max(1))
}

/// The UI shows a single diet badge; the first upstream entry wins
fn primary_diet(diets: &[String]) -> Option<String> {
    diets.first().cloned()
}

/// Reshape a raw upstream recipe payload into a [`RecipeDetail`].
///
/// Only the first `analyzedInstructions` block is rendered; its step
/// ordering is preserved as-is because ingredient scaling downstream keys
/// off step positions.
pub fn normalize_detail(recipe: UpstreamRecipe) -> Result<RecipeDetail> {
    let id = recipe
        .id
        .ok_or_else(|| Error::Internal("Upstream recipe payload has no id".to_string()))?;

    let ingredients = recipe
        .extended_ingredients
        .into_iter()
        .map(|i| Ingredient {
            amount: i.amount.unwrap_or_default(),
            unit: i.unit.unwrap_or_default(),
            name: i.name.unwrap_or_default(),
        })
        .collect();

    let instruction_steps = recipe
        .analyzed_instructions
        .into_iter()
        .next()
        .map(|block| {
            block
                .steps
                .into_iter()
                .enumerate()
                .filter_map(|(position, step)| {
                    let text = step.step?;
                    Some(InstructionStep {
                        number: step.number.unwrap_or(position as u32 + 1),
                        text,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let summary_html = recipe
        .summary
        .map(|s| sanitize_html(&s))
        .unwrap_or_default();

    Ok(RecipeDetail {
        id,
        title: recipe.title.unwrap_or_default(),
        image_url: recipe.image,
        ready_in_minutes: recipe.ready_in_minutes,
        servings: normalize_servings(recipe.servings),
        source_url: recipe.source_url,
        summary_html,
        primary_diet: primary_diet(&recipe.diets),
        diets: recipe.diets,
        nutrients: normalize_nutrients(recipe.nutrition),
        ingredients,
        instruction_steps,
        difficulty: Difficulty::from_ready_time(recipe.ready_in_minutes),
    })
}

/// Reshape a list of upstream recipes, dropping malformed entries.
///
/// Used by the random-recipes path, where one bad record should not sink
/// the whole section.
pub fn normalize_detail_list(recipes: Vec<UpstreamRecipe>) -> Vec<RecipeDetail> {
    let record_count = recipes.len();
    let details: Vec<RecipeDetail> = recipes
        .into_iter()
        .filter_map(|recipe| normalize_detail(recipe).ok())
        .collect();

    let dropped = record_count - details.len();
    if dropped > 0 {
        warn!("Dropped {dropped} random recipes without an id");
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::models::{UpstreamInstructionBlock, UpstreamStep};

    fn base_recipe() -> UpstreamRecipe {
        UpstreamRecipe {
            id: Some(716429),
            title: Some("Pasta with Garlic".to_string()),
            servings: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_servings_become_one() {
        let mut recipe = base_recipe();
        recipe.servings = Some(0);

        let detail = normalize_detail(recipe).unwrap();
        assert_eq!(detail.servings, Some(1));
    }

    #[test]
    fn test_absent_servings_stay_absent() {
        let mut recipe = base_recipe();
        recipe.servings = None;

        let detail = normalize_detail(recipe).unwrap();
        assert_eq!(detail.servings, None);
    }

    #[test]
    fn test_step_order_is_preserved() {
        let mut recipe = base_recipe();
        recipe.analyzed_instructions = vec![UpstreamInstructionBlock {
            name: None,
            steps: vec![
                UpstreamStep {
                    number: Some(1),
                    step: Some("Boil water".to_string()),
                },
                UpstreamStep {
                    number: Some(2),
                    step: Some("Add pasta".to_string()),
                },
                UpstreamStep {
                    number: Some(3),
                    step: Some("Drain".to_string()),
                },
            ],
        }];

        let detail = normalize_detail(recipe).unwrap();
        let texts: Vec<&str> = detail
            .instruction_steps
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Boil water", "Add pasta", "Drain"]);
    }

    #[test]
    fn test_only_first_instruction_block_is_used() {
        let mut recipe = base_recipe();
        recipe.analyzed_instructions = vec![
            UpstreamInstructionBlock {
                name: Some("Main".to_string()),
                steps: vec![UpstreamStep {
                    number: Some(1),
                    step: Some("Cook".to_string()),
                }],
            },
            UpstreamInstructionBlock {
                name: Some("Sauce".to_string()),
                steps: vec![UpstreamStep {
                    number: Some(1),
                    step: Some("Simmer".to_string()),
                }],
            },
        ];

        let detail = normalize_detail(recipe).unwrap();
        assert_eq!(detail.instruction_steps.len(), 1);
        assert_eq!(detail.instruction_steps[0].text, "Cook");
    }

    #[test]
    fn test_summary_html_is_sanitized() {
        let mut recipe = base_recipe();
        recipe.summary = Some("<b>Tasty</b><script>alert('xss')</script>".to_string());

        let detail = normalize_detail(recipe).unwrap();
        assert!(detail.summary_html.contains("<b>Tasty</b>"));
        assert!(!detail.summary_html.contains("script"));
    }

    #[test]
    fn test_primary_diet_is_first_entry() {
        let mut recipe = base_recipe();
        recipe.diets = vec!["vegan".to_string(), "gluten free".to_string()];

        let detail = normalize_detail(recipe).unwrap();
        assert_eq!(detail.primary_diet.as_deref(), Some("vegan"));
    }

    #[test]
    fn test_recipe_without_id_is_rejected() {
        let mut recipe = base_recipe();
        recipe.id = None;
        assert!(normalize_detail(recipe).is_err());
    }

    #[test]
    fn test_list_drops_malformed_entries() {
        let mut bad = base_recipe();
        bad.id = None;

        let details = normalize_detail_list(vec![base_recipe(), bad]);
        assert_eq!(details.len(), 1);
    }
}
