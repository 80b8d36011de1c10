//! Recipes API client
//!
//! Performs the single read-only request against `{base}/recipes` and decodes
//! the JSON array of recipes. Errors are returned to the caller; recovery is
//! the store's job.

use reqwest::Client;
use thiserror::Error;

use super::Recipe;

/// Path appended to the configured base URL
const RECIPES_PATH: &str = "recipes";

/// Errors that can occur when fetching recipes from the API
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse recipes response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for fetching recipes from a remote API
#[derive(Debug, Clone)]
pub struct RecipeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl RecipeClient {
    /// Creates a new RecipeClient for the given base URL
    ///
    /// A single trailing `/` is stripped so that `https://api.example.com/`
    /// and `https://api.example.com` address the same endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a new RecipeClient with a custom HTTP client
    pub fn with_client(http_client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http_client,
            base_url,
        }
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL of the recipes collection
    pub fn recipes_url(&self) -> String {
        format!("{}/{}", self.base_url, RECIPES_PATH)
    }

    /// Fetches the full recipe collection
    ///
    /// # Returns
    /// * `Ok(Vec<Recipe>)` - Recipes as served, not yet normalized
    /// * `Err(FetchError)` - On transport failure, non-2xx status or malformed JSON
    pub async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        let url = self.recipes_url();
        tracing::debug!(%url, "requesting recipes");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        parse_recipes(&text)
    }
}

/// Parses a recipes response body
fn parse_recipes(body: &str) -> Result<Vec<Recipe>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipes_url_strips_trailing_slash() {
        let client = RecipeClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.recipes_url(), "https://api.example.com/recipes");
    }

    #[test]
    fn test_recipes_url_without_trailing_slash() {
        let client = RecipeClient::new("http://localhost:3001/api");
        assert_eq!(client.recipes_url(), "http://localhost:3001/api/recipes");
    }

    #[test]
    fn test_parse_valid_response() {
        let body = r#"[
            {"id": "a", "title": "Toast", "description": "", "image": "", "timeMinutes": 5,
             "ingredients": [{"name": "Bread", "amount": "2 slices"}], "instructions": ["Toast it."]},
            {"id": "b", "title": "Tea", "description": "Hot", "image": "https://x/tea.jpg", "timeMinutes": 3,
             "ingredients": [{"name": "Tea bag"}], "instructions": ["Steep."], "tags": ["drink"]}
        ]"#;

        let recipes = parse_recipes(body).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "a");
        assert!(recipes[0].image.is_empty());
        assert_eq!(recipes[1].tags, Some(vec!["drink".to_string()]));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_recipes("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_recipes("{ not json");
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_parse_object_instead_of_array() {
        let result = parse_recipes(r#"{"recipes": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_required_field() {
        let result = parse_recipes(r#"[{"id": "a", "timeMinutes": 5}]"#);
        assert!(result.is_err(), "title is required");
    }

    #[test]
    fn test_parse_error_message_is_human_readable() {
        let err = parse_recipes("nope").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse recipes response"));
    }
}
