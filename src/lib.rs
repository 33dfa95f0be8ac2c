//! Random recipes from TheMealDB, with instructions translated by an LLM.
//!
//! The entry point is [`RecipeOrchestrator`]: build one, call
//! [`load`](RecipeOrchestrator::load) on startup and whenever the user wants a
//! new recipe, and render [`LoadState`] snapshots.
//!
//! ```no_run
//! use meal_roulette::{AppConfig, RecipeOrchestrator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = RecipeOrchestrator::builder()
//!     .config(AppConfig::load()?)
//!     .build()?;
//! orchestrator.load().await;
//!
//! let state = orchestrator.snapshot();
//! if let Some(recipe) = &state.recipe {
//!     println!("{}\n\n{}", recipe.name(), state.display_text().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod providers;
pub mod uniffi_bindings;
pub mod view;

pub use builder::OrchestratorBuilder;
pub use catalog::{MealDbSource, RecipeSource};
pub use config::{AppConfig, CatalogConfig, TranslationConfig};
pub use error::RecipeError;
pub use model::Recipe;
pub use orchestrator::{
    display_text, LoadOutcome, LoadPhase, LoadState, RecipeOrchestrator, LOAD_FAILED_MESSAGE,
    NO_DESCRIPTION_PLACEHOLDER,
};
pub use providers::{OpenAITranslator, TranslationService, TranslatorFactory};

use std::time::Duration;

/// Build an HTTP client, applying a timeout only when one is configured
pub(crate) fn http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client, RecipeError> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        "meal-roulette/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| RecipeError::Builder(format!("Failed to create HTTP client: {}", e)))
}

/// Fetch one random recipe from TheMealDB using the configured catalog settings
pub async fn fetch_random_recipe() -> Result<Recipe, RecipeError> {
    let config = AppConfig::load()?;
    MealDbSource::new(&config.catalog)?.fetch_random().await
}

/// Translate text with the configured provider into `target_language`
///
/// Fails with `RecipeError::Builder` when translation is disabled in the configuration.
pub async fn translate_text(text: &str, target_language: &str) -> Result<String, RecipeError> {
    let config = AppConfig::load()?;
    let translator = TranslatorFactory::create(&config.translation)?.ok_or_else(|| {
        RecipeError::Builder("Translation is disabled in the configuration".to_string())
    })?;
    translator.translate(text, target_language).await
}

/// Build an orchestrator from `config.toml` and `MEAL_ROULETTE__*` environment variables
pub fn orchestrator_from_env() -> Result<RecipeOrchestrator, RecipeError> {
    RecipeOrchestrator::builder()
        .config(AppConfig::load()?)
        .build()
}
