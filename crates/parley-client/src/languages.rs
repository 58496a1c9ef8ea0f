//! Languages offered by the translator.

/// A selectable language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Provider language code
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
    /// Flag emoji shown next to the name
    pub flag: &'static str,
}

/// All languages, auto-detect first
pub const LANGUAGES: &[Language] = &[
    Language { code: "auto", name: "Auto Detect", flag: "🌐" },
    Language { code: "en", name: "English", flag: "🇺🇸" },
    Language { code: "es", name: "Spanish", flag: "🇪🇸" },
    Language { code: "fr", name: "French", flag: "🇫🇷" },
    Language { code: "de", name: "German", flag: "🇩🇪" },
    Language { code: "it", name: "Italian", flag: "🇮🇹" },
    Language { code: "pt", name: "Portuguese", flag: "🇵🇹" },
    Language { code: "ru", name: "Russian", flag: "🇷🇺" },
    Language { code: "ja", name: "Japanese", flag: "🇯🇵" },
    Language { code: "ko", name: "Korean", flag: "🇰🇷" },
    Language { code: "zh", name: "Chinese", flag: "🇨🇳" },
    Language { code: "ar", name: "Arabic", flag: "🇸🇦" },
    Language { code: "hi", name: "Hindi", flag: "🇮🇳" },
    Language { code: "th", name: "Thai", flag: "🇹🇭" },
    Language { code: "tr", name: "Turkish", flag: "🇹🇷" },
];

/// Look up a language by code
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Display name of a language code
pub fn display_name(code: &str) -> Option<&'static str> {
    find(code).map(|lang| lang.name)
}

/// Languages valid as a translation target (everything but auto-detect)
pub fn target_languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.iter().filter(|lang| lang.code != parley_domain::AUTO_DETECT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        assert_eq!(LANGUAGES.len(), 15);
        assert_eq!(LANGUAGES[0].code, "auto");
        assert_eq!(display_name("ja"), Some("Japanese"));
        assert_eq!(find("tr").map(|l| l.flag), Some("🇹🇷"));
        assert!(find("xx").is_none());
    }

    #[test]
    fn test_targets_exclude_auto() {
        assert_eq!(target_languages().count(), 14);
        assert!(target_languages().all(|lang| lang.code != "auto"));
    }
}
