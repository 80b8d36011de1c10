//! Navigation routes
//!
//! Two views exist: the recipe list at the root path and a recipe detail view
//! at `/recipe/<id>`. Any other path redirects to the list.

use std::fmt;

/// Path prefix of the detail view
const DETAIL_PREFIX: &str = "recipe";

/// A resolved navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Searchable list of all recipes
    List,
    /// Detail view of a single recipe
    Detail(String),
}

impl Route {
    /// Resolves a path to a route
    ///
    /// Leading and trailing slashes are optional. `recipe/<id>` with exactly one
    /// non-empty ID segment is a detail route; everything else, including
    /// unknown paths, resolves to [`Route::List`].
    pub fn resolve(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [prefix, id] if *prefix == DETAIL_PREFIX => Route::Detail(id.to_string()),
            _ => Route::List,
        }
    }

    /// Returns the canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/{}/{}", DETAIL_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
