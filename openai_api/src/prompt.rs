use grammar_correction::Language;

pub(crate) const OPENAI_PROMPT_EN: &str = "Correct the grammar of the following text: ";
pub(crate) const OPENAI_PROMPT_DE: &str = "Korrigiere die Grammatik des folgenden Textes: ";

/// Instructional prompt sent ahead of the user text, in the user's language.
pub(crate) fn prompt_for(language: Language) -> &'static str {
    match language {
        Language::En => OPENAI_PROMPT_EN,
        Language::De => OPENAI_PROMPT_DE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_matches_language() {
        assert_eq!(
            prompt_for(Language::En),
            "Correct the grammar of the following text: "
        );
        assert_eq!(
            prompt_for(Language::De),
            "Korrigiere die Grammatik des folgenden Textes: "
        );
    }
}
