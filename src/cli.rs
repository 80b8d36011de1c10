//! Command-line interface parsing for Recipebox
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a [`View`]: either the (optionally filtered) recipe list or a single
//! recipe's detail view.

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::output;
use crate::route::Route;
use crate::store::RecipeStore;

/// Error types for CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// No recipe has the requested ID
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// JSON output could not be produced
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recipebox - Browse and search recipes
#[derive(Parser, Debug)]
#[command(name = "recipebox")]
#[command(about = "Browse and search recipes from an API or the built-in collection")]
#[command(version)]
pub struct Cli {
    /// Base URL of the recipes API (overrides RECIPEBOX_API_BASE and RECIPEBOX_BACKEND_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub api_base: Option<String>,

    /// Print recipes as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; running without one lists every recipe
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List recipes, optionally filtered by title or ingredient
    List {
        /// Search term matched against titles and ingredient names
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },
    /// Show a single recipe
    Show {
        /// Recipe ID
        id: String,
    },
    /// Open a view by path, e.g. "/" or "/recipe/2"
    ///
    /// Unknown paths open the recipe list.
    Open {
        /// Route path
        path: String,
    },
}

/// What to display, derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Recipe list filtered by a search term (blank shows everything)
    List { search: String },
    /// Detail view of one recipe
    Detail { id: String },
}

impl View {
    /// Creates a View from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        match &cli.command {
            None => View::List {
                search: String::new(),
            },
            Some(Command::List { search }) => View::List {
                search: search.clone().unwrap_or_default(),
            },
            Some(Command::Show { id }) => View::Detail { id: id.clone() },
            Some(Command::Open { path }) => Self::from_route(Route::resolve(path)),
        }
    }

    /// Maps a navigation route to its view
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::List => View::List {
                search: String::new(),
            },
            Route::Detail(id) => View::Detail { id },
        }
    }
}

/// Renders a view against the store
///
/// # Returns
/// * `Ok(String)` - Text or JSON ready to print
/// * `Err(CliError::NotFound)` - If a detail view names an unknown recipe
pub async fn execute(view: &View, store: &RecipeStore, json: bool) -> Result<String, CliError> {
    match view {
        View::List { search } => {
            let recipes = store.search(search).await;
            if json {
                Ok(output::render_json(&recipes)?)
            } else {
                Ok(output::render_list(&recipes, search, store.source()))
            }
        }
        View::Detail { id } => {
            let recipe = store
                .get_by_id(id)
                .await
                .ok_or_else(|| CliError::NotFound(id.clone()))?;
            if json {
                Ok(output::render_json(&recipe)?)
            } else {
                Ok(output::render_detail(&recipe))
            }
        }
    }
}
