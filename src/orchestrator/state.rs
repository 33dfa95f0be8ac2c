use crate::model::Recipe;

/// Shown instead of the recipe whenever the catalog call fails
pub const LOAD_FAILED_MESSAGE: &str = "Couldn't load a recipe. Please try again.";

/// Shown when a recipe has neither translated nor source instructions
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Where the load state machine currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing has been loaded yet
    Idle,
    /// A load is in flight
    Loading,
    /// Recipe loaded and its instructions translated
    Translated,
    /// Recipe loaded, shown with source-language instructions (or none)
    Untranslated,
    /// The catalog call failed
    Failed,
}

/// Everything a front-end needs to render the current recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub recipe: Option<Recipe>,
    pub translated_instructions: Option<String>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl LoadState {
    pub(crate) fn loaded(recipe: Recipe, translated_instructions: Option<String>) -> Self {
        LoadState {
            recipe: Some(recipe),
            translated_instructions,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn failed() -> Self {
        LoadState {
            recipe: None,
            translated_instructions: None,
            is_loading: false,
            error_message: Some(LOAD_FAILED_MESSAGE.to_string()),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if self.error_message.is_some() {
            LoadPhase::Failed
        } else if self.recipe.is_none() {
            LoadPhase::Idle
        } else if self.translated_instructions.is_some() {
            LoadPhase::Translated
        } else {
            LoadPhase::Untranslated
        }
    }

    /// Instructions as they should be shown, or `None` when there is no recipe
    pub fn display_text(&self) -> Option<&str> {
        self.recipe.as_ref().map(|recipe| {
            display_text(
                self.translated_instructions.as_deref(),
                recipe.instructions(),
            )
        })
    }
}

/// Pick the text to show for a recipe: the translation if there is one, then
/// the source instructions, then [`NO_DESCRIPTION_PLACEHOLDER`].
///
/// Every view must go through this so the summary and detail screens agree.
pub fn display_text<'a>(translated: Option<&'a str>, instructions: Option<&'a str>) -> &'a str {
    translated
        .or(instructions)
        .unwrap_or(NO_DESCRIPTION_PLACEHOLDER)
}
