//! UniFFI bindings for meal-roulette
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The host UI owns rendering; it calls `request_load()` on startup and whenever the
//! user asks for another recipe, then renders `snapshot()`.
//! Each orchestrator object manages its own tokio runtime so every call is synchronous.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    AppConfig, LoadOutcome, LoadPhase, LoadState, Recipe, RecipeError, RecipeOrchestrator,
};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    /// Catalog identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Picture URL, if the catalog has one
    pub thumbnail_url: Option<String>,
    /// Instructions in the catalog's language
    pub instructions: Option<String>,
    /// Category (e.g., "Seafood")
    pub category: Option<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(recipe: &Recipe) -> Self {
        FfiRecipe {
            id: recipe.id().to_string(),
            name: recipe.name().to_string(),
            thumbnail_url: recipe.thumbnail_url().map(String::from),
            instructions: recipe.instructions().map(String::from),
            category: recipe.category().map(String::from),
        }
    }
}

/// FFI-compatible load phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiLoadPhase {
    Idle,
    Loading,
    Translated,
    Untranslated,
    Failed,
}

impl From<LoadPhase> for FfiLoadPhase {
    fn from(phase: LoadPhase) -> Self {
        match phase {
            LoadPhase::Idle => FfiLoadPhase::Idle,
            LoadPhase::Loading => FfiLoadPhase::Loading,
            LoadPhase::Translated => FfiLoadPhase::Translated,
            LoadPhase::Untranslated => FfiLoadPhase::Untranslated,
            LoadPhase::Failed => FfiLoadPhase::Failed,
        }
    }
}

/// Snapshot of everything the host UI renders
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiLoadState {
    pub phase: FfiLoadPhase,
    pub recipe: Option<FfiRecipe>,
    pub translated_instructions: Option<String>,
    /// Translation, else source instructions, else the placeholder; empty without a recipe
    pub display_text: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl From<&LoadState> for FfiLoadState {
    fn from(state: &LoadState) -> Self {
        FfiLoadState {
            phase: state.phase().into(),
            recipe: state.recipe.as_ref().map(FfiRecipe::from),
            translated_instructions: state.translated_instructions.clone(),
            display_text: state.display_text().unwrap_or_default().to_string(),
            is_loading: state.is_loading,
            error_message: state.error_message.clone(),
        }
    }
}

/// FFI-compatible error type
///
/// Only construction can fail across the FFI boundary; catalog and provider
/// errors are absorbed by `request_load()` and show up in the snapshot.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Translation is enabled but no API key is configured
    MissingApiKey { message: String },
    /// Configuration or setup error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::MissingApiKey { message } => write!(f, "Missing API key: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecipeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl From<RecipeError> for FfiRecipeError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::MissingApiKey(message) => FfiRecipeError::MissingApiKey { message },
            RecipeError::Builder(message) => FfiRecipeError::ConfigError { message },
            other => FfiRecipeError::ConfigError {
                message: other.to_string(),
            },
        }
    }
}

/// Settings the host app can override; unset fields come from configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiOrchestratorConfig {
    /// Translation provider ("openai" or "ollama")
    pub provider: Option<String>,
    /// Optional API key (uses environment variable if not specified)
    pub api_key: Option<String>,
    /// Optional model name
    pub model: Option<String>,
    /// Language to translate instructions into
    pub target_language: Option<String>,
    /// Optional timeout in seconds (HTTP client default if not specified)
    pub timeout_seconds: Option<u64>,
    /// If true, instructions are always shown untranslated
    pub disable_translation: bool,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecipeError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecipeError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn build_orchestrator(
    config: Option<FfiOrchestratorConfig>,
) -> Result<RecipeOrchestrator, FfiRecipeError> {
    let config = config.unwrap_or_default();

    let app_config = AppConfig::load().map_err(RecipeError::from)?;
    let mut builder = RecipeOrchestrator::builder().config(app_config);

    if let Some(provider) = config.provider {
        builder = builder.provider(provider);
    }

    if let Some(api_key) = config.api_key {
        builder = builder.api_key(api_key);
    }

    if let Some(model) = config.model {
        builder = builder.model(model);
    }

    if let Some(language) = config.target_language {
        builder = builder.target_language(language);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    if config.disable_translation {
        builder = builder.without_translation();
    }

    Ok(builder.build()?)
}

/// Recipe orchestrator handle for host apps
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiRecipeOrchestrator {
    runtime: tokio::runtime::Runtime,
    inner: RecipeOrchestrator,
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiRecipeOrchestrator {
    /// Create an orchestrator from configuration plus the given overrides
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(config: Option<FfiOrchestratorConfig>) -> Result<Arc<Self>, FfiRecipeError> {
        let runtime = create_runtime()?;
        let inner = build_orchestrator(config)?;
        Ok(Arc::new(FfiRecipeOrchestrator { runtime, inner }))
    }

    /// Load a new random recipe, blocking until it is done.
    ///
    /// Returns `false` when another load was already running and this call was ignored.
    pub fn request_load(&self) -> bool {
        match self.runtime.block_on(self.inner.load()) {
            LoadOutcome::Finished(_) => true,
            LoadOutcome::AlreadyInFlight => false,
        }
    }

    /// Current state, safe to call while a load is running on another thread
    pub fn snapshot(&self) -> FfiLoadState {
        FfiLoadState::from(&self.inner.snapshot())
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{LOAD_FAILED_MESSAGE, NO_DESCRIPTION_PLACEHOLDER};

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = Recipe::sample(Some("Boil water."));

        let ffi_recipe = FfiRecipe::from(&recipe);
        assert_eq!(ffi_recipe.id, "52772");
        assert_eq!(ffi_recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(ffi_recipe.instructions.as_deref(), Some("Boil water."));
        assert_eq!(ffi_recipe.category.as_deref(), Some("Chicken"));
    }

    #[test]
    fn test_ffi_load_state_uses_display_text() {
        let state = LoadState {
            recipe: Some(Recipe::sample(None)),
            ..LoadState::default()
        };

        let ffi_state = FfiLoadState::from(&state);
        assert_eq!(ffi_state.phase, FfiLoadPhase::Untranslated);
        assert_eq!(ffi_state.display_text, NO_DESCRIPTION_PLACEHOLDER);
        assert!(!ffi_state.is_loading);
    }

    #[test]
    fn test_ffi_load_state_failed() {
        let state = LoadState {
            error_message: Some(LOAD_FAILED_MESSAGE.to_string()),
            ..LoadState::default()
        };

        let ffi_state = FfiLoadState::from(&state);
        assert_eq!(ffi_state.phase, FfiLoadPhase::Failed);
        assert!(ffi_state.recipe.is_none());
        assert!(ffi_state.display_text.is_empty());
    }

    #[test]
    fn test_error_conversion() {
        let err: FfiRecipeError = RecipeError::MissingApiKey("no key".to_string()).into();
        assert!(matches!(err, FfiRecipeError::MissingApiKey { .. }));
        assert_eq!(err.to_string(), "Missing API key: no key");

        let err: FfiRecipeError = RecipeError::Builder("Unknown provider".to_string()).into();
        assert_eq!(err.to_string(), "Config error: Unknown provider");
    }

    #[test]
    fn test_orchestrator_reports_missing_api_key() {
        let result = FfiRecipeOrchestrator::new(Some(FfiOrchestratorConfig {
            provider: Some("openai".to_string()),
            api_key: Some("  ".to_string()),
            ..FfiOrchestratorConfig::default()
        }));

        assert!(matches!(result, Err(FfiRecipeError::MissingApiKey { .. })));
    }

    #[test]
    fn test_orchestrator_without_translation() {
        let orchestrator = FfiRecipeOrchestrator::new(Some(FfiOrchestratorConfig {
            disable_translation: true,
            ..FfiOrchestratorConfig::default()
        }))
        .unwrap();

        let state = orchestrator.snapshot();
        assert_eq!(state.phase, FfiLoadPhase::Idle);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
