//! Recipe store module
//!
//! This module provides the in-memory store that loads the recipe collection
//! once per process and exposes lookup, search and observable loading/error
//! state. There is no persistence, invalidation or refresh: the cached
//! collection lives exactly as long as the store.

mod recipe_store;
mod status;

pub use recipe_store::{RecipeStore, Snapshot};
pub use status::watch_stream;
