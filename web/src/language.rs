use grammar_correction::{CorrectionError, Language};

/// Maps a request's `Content-Language` tag to the language used for the
/// correction prompt, plus the tag to echo on the response. An absent tag
/// counts as English.
pub(crate) fn resolve_language(tag: &str) -> Result<(Language, &str), CorrectionError> {
    match tag {
        "de" | "de-DE" => Ok((Language::De, tag)),
        "" => Ok((Language::En, "en")),
        "en" | "en-US" | "en-GB" => Ok((Language::En, tag)),
        _ => Err(CorrectionError::UnsupportedLanguage {
            tag: tag.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_german_tags() {
        for tag in ["de", "de-DE"] {
            let (language, echo) = resolve_language(tag).unwrap();
            assert_eq!(language, Language::De);
            assert_eq!(echo, tag);
        }
    }

    #[test]
    fn resolves_english_tags() {
        for tag in ["en", "en-US", "en-GB"] {
            let (language, echo) = resolve_language(tag).unwrap();
            assert_eq!(language, Language::En);
            assert_eq!(echo, tag);
        }
    }

    #[test]
    fn missing_tag_defaults_to_english() {
        let (language, echo) = resolve_language("").unwrap();
        assert_eq!(language, Language::En);
        assert_eq!(echo, "en");
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = resolve_language("fr").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("language not supported"));
        assert!(message.contains("fr"));
    }
}
