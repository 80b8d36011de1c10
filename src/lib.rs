//! Recipebox Library
//!
//! Loads a recipe collection once, from a remote API or a built-in dataset,
//! and exposes lookup and search over it. The modules are public so the
//! binary and integration tests can share them.

pub mod cli;
pub mod config;
pub mod data;
pub mod output;
pub mod route;
pub mod store;

pub use config::StoreConfig;
pub use data::{Ingredient, Recipe, RecipeSource};
pub use store::RecipeStore;
