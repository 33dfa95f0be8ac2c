//! Plain-text rendering of a [`LoadState`] for terminal front-ends.

use crate::orchestrator::{LoadPhase, LoadState};

/// Lines of instructions shown on the summary screen
pub const SUMMARY_LINE_LIMIT: usize = 5;

pub const IDLE_HINT: &str = "No recipe yet.\nPress Enter to get a suggestion!";

pub const LOADING_TEXT: &str = "Finding something to cook...";

/// The main screen: name, category, picture link and the first few lines of
/// instructions. Falls back to the loading, error or idle text.
pub fn render_summary(state: &LoadState) -> String {
    match state.phase() {
        LoadPhase::Loading => LOADING_TEXT.to_string(),
        LoadPhase::Failed => state.error_message.clone().unwrap_or_default(),
        LoadPhase::Idle => IDLE_HINT.to_string(),
        LoadPhase::Translated | LoadPhase::Untranslated => {
            let (Some(recipe), Some(text)) = (&state.recipe, state.display_text()) else {
                return IDLE_HINT.to_string();
            };

            let mut out = String::new();
            out.push_str(recipe.name());
            out.push('\n');
            if let Some(category) = recipe.category() {
                out.push_str(&format!("# {}\n", category));
            }
            if let Some(thumb) = recipe.thumbnail_url() {
                out.push_str(&format!("{}\n", thumb));
            }
            out.push_str("\nInstructions\n");
            out.push_str(&first_lines(text, SUMMARY_LINE_LIMIT));
            out
        }
    }
}

/// The full recipe text, or `None` when there is no recipe to show
pub fn render_detail(state: &LoadState) -> Option<String> {
    let recipe = state.recipe.as_ref()?;
    let text = state.display_text()?;
    Some(format!("{}\n\n{}", recipe.name(), text.trim()))
}

fn first_lines(text: &str, limit: usize) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut out = lines
        .iter()
        .take(limit)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    if lines.len() > limit {
        out.push_str("\n...");
    }
    out
}
