//! Core data models for Recipebox
//!
//! This module contains the recipe types shared by the HTTP client, the
//! built-in fallback dataset and the store, plus the normalization and
//! search rules applied to every recipe regardless of where it came from.

pub mod client;
pub mod fallback;

pub use client::{FetchError, RecipeClient};
pub use fallback::{fallback_recipe_by_id, fallback_recipes};

use serde::{Deserialize, Deserializer, Serialize};

/// Image used for any recipe that arrives without one
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=1200&q=80&auto=format&fit=crop";

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, used for search
    pub name: String,
    /// Free-form quantity such as "2 tbsp"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// A dish with metadata, ingredients and ordered instructions
///
/// Field names follow the camelCase JSON shape served by the recipes API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, stable across requests
    pub id: String,
    /// Display name
    pub title: String,
    /// Free text description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Image URL; empty until normalized
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// Preparation time in minutes
    pub time_minutes: u32,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Instruction steps in execution order
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Category labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Recipe {
    /// Returns the recipe with a usable image URL.
    ///
    /// An empty or blank `image` is replaced by [`PLACEHOLDER_IMAGE_URL`];
    /// every other field is left untouched.
    pub fn normalized(mut self) -> Self {
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE_URL.to_string();
        }
        self
    }

    /// Checks whether the title or any ingredient name contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.to_lowercase().contains(needle))
    }
}

/// Reads a string field that may be `null`, treating `null` as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where the memoized recipe collection was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// The configured recipes API
    Remote,
    /// The built-in dataset
    Fallback,
}

impl std::fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeSource::Remote => write!(f, "remote"),
            RecipeSource::Fallback => write!(f, "built-in"),
        }
    }
}

/// Applies [`Recipe::normalized`] to every record
pub fn normalize_all(recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.into_iter().map(Recipe::normalized).collect()
}

/// Filters recipes by a free-text search term
///
/// The term is trimmed and lowercased. A blank term keeps every recipe;
/// otherwise a recipe is kept when its title or one of its ingredient names
/// contains the term. Input order is preserved.
pub fn filter_recipes(recipes: &[Recipe], term: &str) -> Vec<Recipe> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.to_vec();
    }

    recipes
        .iter()
        .filter(|recipe| recipe.matches(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            time_minutes: 10,
            ingredients: ingredients
                .iter()
                .map(|name| Ingredient {
                    name: name.to_string(),
                    amount: None,
                })
                .collect(),
            instructions: vec!["Cook.".to_string()],
            tags: None,
        }
    }

    #[test]
    fn test_normalized_fills_empty_image() {
        let normalized = recipe("a", "Toast", &["Bread"]).normalized();
        assert_eq!(normalized.image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_normalized_fills_blank_image() {
        let mut r = recipe("a", "Toast", &["Bread"]);
        r.image = "   ".to_string();
        assert_eq!(r.normalized().image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_normalized_keeps_existing_image_and_fields() {
        let mut r = recipe("a", "Toast", &["Bread"]);
        r.image = "https://example.com/toast.jpg".to_string();
        r.tags = Some(vec!["breakfast".to_string()]);
        let normalized = r.clone().normalized();
        assert_eq!(normalized, r);
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_optionals() {
        let json = r#"{
            "id": "42",
            "title": "Soup",
            "description": "Warm",
            "timeMinutes": 15,
            "ingredients": [{"name": "Water"}, {"name": "Salt", "amount": "1 tsp"}],
            "instructions": ["Boil.", "Season."]
        }"#;

        let r: Recipe = serde_json::from_str(json).expect("Failed to deserialize Recipe");
        assert_eq!(r.id, "42");
        assert_eq!(r.time_minutes, 15);
        assert!(r.image.is_empty());
        assert!(r.tags.is_none());
        assert_eq!(r.ingredients[0].amount, None);
        assert_eq!(r.ingredients[1].amount.as_deref(), Some("1 tsp"));
        assert_eq!(r.instructions, vec!["Boil.", "Season."]);
    }

    #[test]
    fn test_deserialize_null_image_and_description() {
        let json = r#"{"id": "7", "title": "Toast", "description": null, "image": null,
                       "timeMinutes": 5, "ingredients": [], "instructions": []}"#;

        let r: Recipe = serde_json::from_str(json).expect("null strings should be accepted");
        assert!(r.description.is_empty());
        assert!(r.image.is_empty());
        assert_eq!(r.normalized().image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&recipe("a", "Toast", &["Bread"])).unwrap();
        assert!(json.contains("\"timeMinutes\":10"));
        assert!(!json.contains("tags"));
        assert!(!json.contains("amount"));
    }

    #[test]
    fn test_filter_blank_term_returns_everything_in_order() {
        let recipes = vec![
            recipe("1", "Salmon", &["Fish"]),
            recipe("2", "Pasta", &["Mushrooms"]),
        ];
        assert_eq!(filter_recipes(&recipes, ""), recipes);
        assert_eq!(filter_recipes(&recipes, "   "), recipes);
    }

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        let recipes = vec![
            recipe("1", "Grilled Salmon", &["Fish"]),
            recipe("2", "Pasta", &["Mushrooms"]),
        ];
        let found = filter_recipes(&recipes, "  SALMON ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_filter_matches_ingredient_names() {
        let recipes = vec![
            recipe("1", "Grilled Salmon", &["Olive oil"]),
            recipe("2", "Pasta", &["Garlic"]),
            recipe("3", "Salad", &["Olive oil", "Mint"]),
        ];
        let ids: Vec<String> = filter_recipes(&recipes, "olive")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_no_match_returns_empty() {
        let recipes = vec![recipe("1", "Toast", &["Bread"])];
        assert!(filter_recipes(&recipes, "chocolate").is_empty());
    }

    #[test]
    fn test_recipe_source_display() {
        assert_eq!(RecipeSource::Remote.to_string(), "remote");
        assert_eq!(RecipeSource::Fallback.to_string(), "built-in");
    }
}
