/// The system prompt used for translating recipe instructions.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro. `{language}` marks where the target language goes.
pub const TRANSLATION_PROMPT: &str = include_str!("prompt.txt");

const LANGUAGE_MARKER: &str = "{language}";

/// Build the system prompt for the given target language.
///
/// A blank language falls back to English so the prompt never contains an
/// empty slot.
pub fn build_translation_prompt(target_language: &str) -> String {
    let language = match target_language.trim() {
        "" => "English",
        trimmed => trimmed,
    };
    TRANSLATION_PROMPT
        .trim_end()
        .replace(LANGUAGE_MARKER, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!TRANSLATION_PROMPT.is_empty());
        assert!(TRANSLATION_PROMPT.contains(LANGUAGE_MARKER));
        assert!(TRANSLATION_PROMPT.contains("Output only the translated text"));
    }

    #[test]
    fn test_build_translation_prompt_substitutes_language() {
        let prompt = build_translation_prompt("Korean");
        assert!(prompt.contains("fluent Korean"));
        assert!(!prompt.contains(LANGUAGE_MARKER));
    }

    #[test]
    fn test_build_translation_prompt_handles_blank_language() {
        let prompt = build_translation_prompt("   ");
        assert!(prompt.contains("fluent English"));
    }
}
