//! Translation helper
//!
//! Every piece of user-facing lesson text exists in English and, usually,
//! in Russian and Uzbek. [`resolve`] picks the active language's variant and
//! falls back to English when the variant is missing or empty.

use crate::types::{Language, LocalizedText, Phrase};

/// A bundle of text keyed by language
pub trait Localized {
    /// The variant for `lang`, if the bundle has one
    fn variant(&self, lang: Language) -> Option<&str>;

    /// The English variant; always present
    fn english(&self) -> &str;
}

impl Localized for Phrase {
    fn variant(&self, lang: Language) -> Option<&str> {
        Some(match lang {
            Language::En => self.en,
            Language::Ru => self.ru,
            Language::Uz => self.uz,
        })
    }

    fn english(&self) -> &str {
        self.en
    }
}

impl Localized for LocalizedText {
    fn variant(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::En => Some(self.en.as_str()),
            Language::Ru => self.ru.as_deref(),
            Language::Uz => self.uz.as_deref(),
        }
    }

    fn english(&self) -> &str {
        &self.en
    }
}

/// Resolve a bundle to the text for `lang`, falling back to English
pub fn resolve<T: Localized + ?Sized>(lang: Language, bundle: &T) -> &str {
    match bundle.variant(lang) {
        Some(text) if !text.is_empty() => text,
        _ => bundle.english(),
    }
}

/// Short alias used throughout the slide renderers
pub fn t<T: Localized + ?Sized>(lang: Language, bundle: &T) -> &str {
    resolve(lang, bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uzbek_falls_back_to_english() {
        let bundle = LocalizedText::english("Hello").with_ru("Привет");
        assert_eq!(resolve(Language::Uz, &bundle), "Hello");
        assert_eq!(resolve(Language::Ru, &bundle), "Привет");
    }

    #[test]
    fn test_empty_variant_falls_back_to_english() {
        let phrase = Phrase::new("Check", "", "Tekshirish");
        assert_eq!(resolve(Language::Ru, &phrase), "Check");
        assert_eq!(resolve(Language::Uz, &phrase), "Tekshirish");
    }

    #[test]
    fn test_resolve_every_language() {
        let phrase = Phrase::new("Start", "Старт", "Boshlash");
        assert_eq!(t(Language::En, &phrase), "Start");
        assert_eq!(t(Language::Ru, &phrase), "Старт");
        assert_eq!(t(Language::Uz, &phrase), "Boshlash");
    }
}
