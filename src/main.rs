//! Recipebox - Browse recipes from the command line
//!
//! Lists, searches and shows recipes served by a recipes API, or by the
//! built-in collection when no API is configured or reachable.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use recipebox::cli::{execute, Cli, View};
use recipebox::config::StoreConfig;
use recipebox::store::RecipeStore;

/// Sets up logging to stderr so stdout stays clean for output
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,recipebox=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = StoreConfig::from_env().with_endpoint_override(cli.api_base.as_deref());
    tracing::debug!(endpoint = ?config.endpoint, "resolved configuration");

    let store = RecipeStore::new(config);
    let view = View::from_cli(&cli);

    let result = execute(&view, &store, cli.json).await;

    if let Some(snapshot) = store.snapshot() {
        tracing::debug!(
            source = %snapshot.source,
            count = snapshot.recipes.len(),
            loaded_at = %snapshot.loaded_at.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            "served recipes"
        );
    }

    if let Some(error) = store.current_error() {
        eprintln!("warning: using built-in recipes: {}", error);
    }

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
