//! Fetch, translate and publish: the pipeline behind every "new recipe" request.
//!
//! [`RecipeOrchestrator::load`] runs the catalog call, then (when there are
//! instructions and a translator) the translation call, and publishes the
//! result as a [`LoadState`]. Only one load runs at a time; a request that
//! arrives while another is in flight is ignored.

mod state;

pub use state::{
    display_text, LoadPhase, LoadState, LOAD_FAILED_MESSAGE, NO_DESCRIPTION_PLACEHOLDER,
};

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::builder::OrchestratorBuilder;
use crate::catalog::RecipeSource;
use crate::model::Recipe;
use crate::providers::TranslationService;

/// What happened to a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The load ran to completion and left the state in this phase
    Finished(LoadPhase),
    /// Another load was already running; nothing was done
    AlreadyInFlight,
}

pub struct RecipeOrchestrator {
    source: Box<dyn RecipeSource>,
    translator: Option<Box<dyn TranslationService>>,
    target_language: String,
    // Only written while `in_flight` is held.
    state: watch::Sender<LoadState>,
    in_flight: Mutex<()>,
}

impl RecipeOrchestrator {
    /// Create an orchestrator in the `Idle` state.
    ///
    /// Pass `None` as the translator to always show source-language instructions.
    pub fn new(
        source: Box<dyn RecipeSource>,
        translator: Option<Box<dyn TranslationService>>,
        target_language: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        RecipeOrchestrator {
            source,
            translator,
            target_language: target_language.into(),
            state,
            in_flight: Mutex::new(()),
        }
    }

    /// Creates a new builder for assembling an orchestrator
    pub fn builder() -> OrchestratorBuilder {
        OrchestratorBuilder::default()
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn translation_enabled(&self) -> bool {
        self.translator.is_some()
    }

    /// A copy of the current state
    pub fn snapshot(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Watch every published state transition
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Run one fetch-translate cycle and publish the result.
    ///
    /// Never fails: catalog errors become [`LOAD_FAILED_MESSAGE`], translation
    /// errors are logged and the source instructions are kept.
    pub async fn load(&self) -> LoadOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("Load requested while another is in flight, ignoring");
            return LoadOutcome::AlreadyInFlight;
        };

        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error_message = None;
            state.translated_instructions = None;
        });
        let _loading = LoadingFlag(&self.state);

        let next = match self.source.fetch_random().await {
            // The recipe is published together with its translation, not before it.
            Ok(recipe) => {
                let translated = self.translate_instructions(&recipe).await;
                LoadState::loaded(recipe, translated)
            }
            Err(e) => {
                error!(
                    "Failed to fetch recipe from {}: {}",
                    self.source.source_name(),
                    e
                );
                LoadState::failed()
            }
        };

        let phase = next.phase();
        self.state.send_replace(next);
        debug!("Load finished in phase {:?}", phase);
        LoadOutcome::Finished(phase)
    }

    /// Spawn [`load`](Self::load) on the current Tokio runtime
    pub fn request_load(self: &Arc<Self>) -> JoinHandle<LoadOutcome> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move { orchestrator.load().await })
    }

    async fn translate_instructions(&self, recipe: &Recipe) -> Option<String> {
        info!("Fetched recipe '{}' ({})", recipe.name(), recipe.id());

        let (Some(instructions), Some(translator)) = (recipe.instructions(), &self.translator)
        else {
            return None;
        };

        match translator
            .translate(instructions, &self.target_language)
            .await
        {
            Ok(translated) if translated.trim().is_empty() => {
                warn!(
                    "{} returned a blank translation, showing source instructions",
                    translator.provider_name()
                );
                None
            }
            Ok(translated) => {
                info!(
                    "Translated instructions to {} using {}",
                    self.target_language,
                    translator.provider_name()
                );
                Some(translated)
            }
            Err(e) => {
                warn!(
                    "Translation with {} failed, showing source instructions: {}",
                    translator.provider_name(),
                    e
                );
                None
            }
        }
    }
}

/// Clears `is_loading` if a load ends without publishing its result, i.e. the
/// future was dropped or a source/translator panicked.
struct LoadingFlag<'a>(&'a watch::Sender<LoadState>);

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| std::mem::replace(&mut state.is_loading, false));
    }
}
