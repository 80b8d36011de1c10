//! Memoized recipe store
//!
//! Loads the recipe collection at most once per process, from the recipes API
//! when one is configured and from the built-in dataset otherwise. A failed
//! API request is recovered here: the message is recorded as the last error
//! and the built-in dataset is served instead. Nothing is ever refetched.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use tokio::sync::{watch, OnceCell};

use super::status::{watch_stream, StoreStatus};
use crate::config::StoreConfig;
use crate::data::{
    fallback_recipes, filter_recipes, normalize_all, FetchError, Recipe, RecipeClient,
    RecipeSource,
};

/// Message recorded when a fetch error renders as an empty string
const DEFAULT_ERROR_MESSAGE: &str = "Failed to load recipes, using local data.";

/// The loaded collection together with where and when it was loaded
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Normalized recipes in source order
    pub recipes: Arc<Vec<Recipe>>,
    /// Where the recipes came from
    pub source: RecipeSource,
    /// When loading finished
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
struct StoreInner {
    client: Option<RecipeClient>,
    fallback_delay: Duration,
    snapshot: OnceCell<Snapshot>,
    status: StoreStatus,
    loads_started: AtomicUsize,
}

/// Shared handle to the recipe collection
///
/// Cheap to clone; all clones observe the same cache and status. Concurrent
/// first callers of [`RecipeStore::get_all`] wait on the same load instead of
/// starting their own.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    inner: Arc<StoreInner>,
}

impl RecipeStore {
    /// Creates a store from configuration
    pub fn new(config: StoreConfig) -> Self {
        let client = config.endpoint.map(RecipeClient::new);
        Self::with_client(client, config.fallback_delay)
    }

    /// Creates a store with an explicit client, or none for built-in data only
    pub fn with_client(client: Option<RecipeClient>, fallback_delay: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                client,
                fallback_delay,
                snapshot: OnceCell::new(),
                status: StoreStatus::new(),
                loads_started: AtomicUsize::new(0),
            }),
        }
    }

    /// Returns the recipe collection, loading it on first use
    ///
    /// Never fails: any API problem degrades to the built-in dataset. Once
    /// loaded, every call returns the same `Arc` without further I/O.
    pub async fn get_all(&self) -> Arc<Vec<Recipe>> {
        let snapshot = self.inner.snapshot.get_or_init(|| self.load()).await;
        // Cleared only once the cache slot is filled
        self.inner.status.set_loading(false);
        Arc::clone(&snapshot.recipes)
    }

    /// Looks up a recipe by ID, loading the collection if needed
    ///
    /// Returns `None` for an unknown ID. When several records share an ID the
    /// first one wins.
    pub async fn get_by_id(&self, id: &str) -> Option<Recipe> {
        let recipes = match self.cached() {
            Some(recipes) => recipes,
            None => self.get_all().await,
        };
        recipes.iter().find(|recipe| recipe.id == id).cloned()
    }

    /// Filters the collection by title or ingredient name
    ///
    /// See [`filter_recipes`] for the matching rules. Searching before the
    /// first load waits for that load.
    pub async fn search(&self, term: &str) -> Vec<Recipe> {
        filter_recipes(&self.get_all().await, term)
    }

    /// Returns the collection if it has already been loaded
    pub fn cached(&self) -> Option<Arc<Vec<Recipe>>> {
        self.inner
            .snapshot
            .get()
            .map(|snapshot| Arc::clone(&snapshot.recipes))
    }

    /// Returns the loaded snapshot, if any
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.inner.snapshot.get()
    }

    /// Where the collection came from, once loaded
    pub fn source(&self) -> Option<RecipeSource> {
        self.snapshot().map(|snapshot| snapshot.source)
    }

    /// When the collection finished loading
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot().map(|snapshot| snapshot.loaded_at)
    }

    /// Base URL of the configured API, if any
    pub fn endpoint(&self) -> Option<&str> {
        self.inner.client.as_ref().map(RecipeClient::base_url)
    }

    /// Number of loads started over the store's lifetime
    pub fn loads_started(&self) -> usize {
        self.inner.loads_started.load(Ordering::SeqCst)
    }

    /// Whether a load is currently outstanding
    pub fn is_loading(&self) -> bool {
        self.inner.status.is_loading()
    }

    /// The most recent error message, if the last load failed
    pub fn current_error(&self) -> Option<String> {
        self.inner.status.current_error()
    }

    /// Subscribes to the loading flag
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.inner.status.subscribe_loading()
    }

    /// Subscribes to the last error message
    pub fn subscribe_errors(&self) -> watch::Receiver<Option<String>> {
        self.inner.status.subscribe_errors()
    }

    /// Stream of the loading flag: current value first, then each change
    pub fn loading_status(&self) -> BoxStream<'static, bool> {
        watch_stream(self.subscribe_loading())
    }

    /// Stream of the last error message: current value first, then each change
    pub fn last_error(&self) -> BoxStream<'static, Option<String>> {
        watch_stream(self.subscribe_errors())
    }

    /// Performs the one and only load
    async fn load(&self) -> Snapshot {
        self.inner.loads_started.fetch_add(1, Ordering::SeqCst);
        self.inner.status.set_loading(true);
        let mut guard = LoadingGuard::new(&self.inner.status);

        let (recipes, source) = match &self.inner.client {
            Some(client) => match client.fetch_recipes().await {
                Ok(recipes) => {
                    tracing::info!(
                        count = recipes.len(),
                        url = %client.recipes_url(),
                        "loaded recipes from API"
                    );
                    self.inner.status.set_error(None);
                    (recipes, RecipeSource::Remote)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "recipes API failed, using built-in recipes");
                    self.inner.status.set_error(Some(error_message(&err)));
                    (self.fallback().await, RecipeSource::Fallback)
                }
            },
            None => {
                tracing::debug!("no recipes API configured, using built-in recipes");
                let recipes = self.fallback().await;
                self.inner.status.set_error(None);
                (recipes, RecipeSource::Fallback)
            }
        };

        let snapshot = Snapshot {
            recipes: Arc::new(normalize_all(recipes)),
            source,
            loaded_at: Utc::now(),
        };
        tracing::debug!(
            source = %snapshot.source,
            loaded_at = %snapshot.loaded_at.to_rfc3339(),
            "recipe collection cached"
        );
        // get_all clears the flag once the cache slot is filled
        guard.completed = true;
        snapshot
    }

    /// Serves the built-in dataset after the configured delay
    async fn fallback(&self) -> Vec<Recipe> {
        if !self.inner.fallback_delay.is_zero() {
            tokio::time::sleep(self.inner.fallback_delay).await;
        }
        fallback_recipes()
    }
}

/// Clears the loading flag when a load is dropped before completing
struct LoadingGuard<'a> {
    status: &'a StoreStatus,
    completed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(status: &'a StoreStatus) -> Self {
        Self {
            status,
            completed: false,
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.status.set_loading(false);
        }
    }
}

/// Renders a fetch error for display
fn error_message(err: &FetchError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        DEFAULT_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
