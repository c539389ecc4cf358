use serde::Serialize;
use tracing::warn;

use crate::search::criteria::FilterCriteria;
use crate::upstream::models::{UpstreamNutrition, UpstreamSearchResponse};

/// Presentation difficulty band derived from total ready time.
///
/// Thresholds are fixed: 20 minutes and under is Easy, 45 and under is
/// Medium, everything else is Hard. A recipe with no timing lands on
/// Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_ready_time(ready_in_minutes: Option<u32>) -> Self {
        match ready_in_minutes {
            None => Difficulty::Medium,
            Some(minutes) if minutes <= 20 => Difficulty::Easy,
            Some(minutes) if minutes <= 45 => Difficulty::Medium,
            Some(_) => Difficulty::Hard,
        }
    }
}

/// A nutrient entry, order preserved from upstream
#[derive(Debug, Clone, Serialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

pub(crate) fn normalize_nutrients(nutrition: Option<UpstreamNutrition>) -> Vec<Nutrient> {
    nutrition
        .map(|n| {
            n.nutrients
                .into_iter()
                .map(|n| Nutrient {
                    name: n.name,
                    amount: n.amount.unwrap_or_default(),
                    unit: n.unit,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// One search hit in the stable internal shape the UI renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    pub nutrients: Vec<Nutrient>,
    pub difficulty: Difficulty,
}

/// A normalized page of search results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    pub results: Vec<SearchResultItem>,
    pub offset: u32,
    pub number: u32,
    pub total_results: u64,
    pub total_pages: u64,
}

/// Page count for a result set; a page always exists, even when empty
pub fn page_count(total_results: u64, number: u32) -> u64 {
    total_results.div_ceil(u64::from(number.max(1))).max(1)
}

/// Reshape a raw upstream search payload into a [`SearchResultPage`].
///
/// Records without an id cannot be rendered or linked, so they are dropped
/// and counted as a data-quality warning rather than failing the page.
/// When upstream omits `totalResults`, `offset + items.len()` stands in as
/// a lower-bound estimate; the UI's page-count math divides by it.
pub fn normalize_page(
    payload: UpstreamSearchResponse,
    criteria: &FilterCriteria,
) -> SearchResultPage {
    let offset = payload.offset.unwrap_or(criteria.offset);
    let number = payload.number.unwrap_or(criteria.number);

    let record_count = payload.results.len();
    let results: Vec<SearchResultItem> = payload
        .results
        .into_iter()
        .filter_map(|record| {
            let id = record.id?;
            Some(SearchResultItem {
                id,
                title: record.title.unwrap_or_default(),
                image_url: record.image,
                ready_in_minutes: record.ready_in_minutes,
                servings: record.servings,
                nutrients: normalize_nutrients(record.nutrition),
                difficulty: Difficulty::from_ready_time(record.ready_in_minutes),
            })
        })
        .collect();

    let dropped = record_count - results.len();
    if dropped > 0 {
        warn!("Dropped {dropped} search records without an id");
    }

    let total_results = payload
        .total_results
        .unwrap_or(u64::from(offset) + results.len() as u64);

    SearchResultPage {
        total_pages: page_count(total_results, number),
        results,
        offset,
        number,
        total_results,
    }
}
