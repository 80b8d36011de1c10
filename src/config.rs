//! Endpoint resolution and store configuration
//!
//! The recipes API base URL may come from the process environment at runtime
//! or be baked in at build time. Candidates are checked in a fixed order and
//! the first one that is non-empty after trimming wins. When nothing resolves
//! the store runs purely on the built-in dataset.

use std::time::Duration;

/// Runtime/build-time variable holding the API base URL
pub const API_BASE_VAR: &str = "RECIPEBOX_API_BASE";

/// Runtime/build-time variable holding the backend URL (alias of the API base)
pub const BACKEND_URL_VAR: &str = "RECIPEBOX_BACKEND_URL";

/// Artificial delay before serving the built-in dataset
const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(200);

/// The four places an API endpoint can come from, in priority order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointSources {
    /// `RECIPEBOX_API_BASE` from the process environment
    pub runtime_api_base: Option<String>,
    /// `RECIPEBOX_BACKEND_URL` from the process environment
    pub runtime_backend_url: Option<String>,
    /// `RECIPEBOX_API_BASE` captured at compile time
    pub build_api_base: Option<String>,
    /// `RECIPEBOX_BACKEND_URL` captured at compile time
    pub build_backend_url: Option<String>,
}

impl EndpointSources {
    /// Gathers candidates from the environment and compile-time constants
    pub fn from_env() -> Self {
        Self {
            runtime_api_base: std::env::var(API_BASE_VAR).ok(),
            runtime_backend_url: std::env::var(BACKEND_URL_VAR).ok(),
            build_api_base: option_env!("RECIPEBOX_API_BASE").map(str::to_string),
            build_backend_url: option_env!("RECIPEBOX_BACKEND_URL").map(str::to_string),
        }
    }

    /// Resolves the endpoint
    ///
    /// # Returns
    /// * `Some(String)` - The first candidate that is non-empty after trimming, trimmed
    /// * `None` - No endpoint configured
    pub fn resolve(&self) -> Option<String> {
        [
            &self.runtime_api_base,
            &self.runtime_backend_url,
            &self.build_api_base,
            &self.build_backend_url,
        ]
        .into_iter()
        .find_map(|candidate| non_blank(candidate.as_deref()))
    }
}

/// Returns the trimmed value if it is non-empty
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Configuration for the recipe store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the recipes API, if any
    pub endpoint: Option<String>,
    /// Delay before the built-in dataset is served
    pub fallback_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from the environment
    pub fn from_env() -> Self {
        Self::from_sources(&EndpointSources::from_env(), None)
    }

    /// Creates a StoreConfig from explicit sources
    ///
    /// # Arguments
    /// * `sources` - Environment and build-time candidates
    /// * `override_endpoint` - A command-line value; wins over every source when non-blank
    pub fn from_sources(sources: &EndpointSources, override_endpoint: Option<&str>) -> Self {
        Self {
            endpoint: non_blank(override_endpoint).or_else(|| sources.resolve()),
            ..Self::default()
        }
    }

    /// Replaces the endpoint with a command-line value when it is non-blank
    pub fn with_endpoint_override(mut self, override_endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = non_blank(override_endpoint) {
            self.endpoint = Some(endpoint);
        }
        self
    }

    /// Sets the fallback delay
    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }
}
