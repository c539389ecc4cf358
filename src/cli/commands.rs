use crate::search::mood::ALL_MOODS;
use crate::{Error, Result};
use reqwest::Client;
use serde::Deserialize;

/// Search for recipes against a running server
pub async fn search(
    server_url: &str,
    query: &str,
    cuisine: Option<String>,
    diet: Option<String>,
    max_time: Option<u32>,
) -> Result<()> {
    let client = Client::new();

    // Build query params
    let mut url = format!(
        "{}/recipes/search?query={}",
        server_url,
        urlencoding::encode(query)
    );

    if let Some(cuisine) = cuisine {
        url.push_str(&format!("&cuisine={}", urlencoding::encode(&cuisine)));
    }

    if let Some(diet) = diet {
        url.push_str(&format!("&diet={}", urlencoding::encode(&diet)));
    }

    if let Some(max_time) = max_time {
        url.push_str(&format!("&maxReadyTime={max_time}"));
    }

    // Make request
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Internal(format!("Failed to reach server: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Internal(format!(
            "Server returned HTTP {}",
            response.status()
        )));
    }

    let search_results: SearchPage = response
        .json()
        .await
        .map_err(|e| Error::Internal(format!("Malformed server response: {e}")))?;

    // Display results
    print_search_results(&search_results);

    Ok(())
}

/// List the available mood shortcuts
pub fn moods() {
    println!("\nAvailable moods:\n");
    println!("{:<10} {:<14} {:<14} {:<12}", "Mood", "Meal type", "Tags", "Diet");
    println!("{}", "-".repeat(50));

    for mood in ALL_MOODS {
        let profile = mood.profile();
        println!(
            "{:<10} {:<14} {:<14} {:<12}",
            mood.as_str(),
            profile.meal_type,
            profile.tags,
            profile.diet.unwrap_or("-")
        );
    }

    println!("\nTo search by mood: GET /recipes/mood?mood=<name>");
}

fn print_search_results(page: &SearchPage) {
    if page.results.is_empty() {
        println!("No recipes found");
        return;
    }

    println!("\nFound {} recipes:\n", page.total_results);
    println!("{:<10} {:<50} {:<8} {:<8}", "ID", "Title", "Minutes", "Level");
    println!("{}", "-".repeat(78));

    for recipe in &page.results {
        let minutes = recipe
            .ready_in_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<10} {:<50} {:<8} {:<8}",
            recipe.id,
            truncate(&recipe.title, 48),
            minutes,
            recipe.difficulty
        );
    }

    let page_number = page.offset / page.number.max(1) + 1;
    println!("\nPage {} of {}", page_number, page.total_pages);
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
#[serde(rename_all = "camelCase")]
struct SearchPage {
    results: Vec<RecipeRow>,
    offset: u32,
    number: u32,
    total_results: u64,
    total_pages: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRow {
    id: u64,
    title: String,
    ready_in_minutes: Option<u32>,
    difficulty: String,
}
