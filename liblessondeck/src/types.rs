//! Core types for the lesson deck

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for translated lesson text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uz,
}

impl Language {
    /// All supported languages, in switcher order
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::Uz];

    /// Two-letter code used in configuration and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
        }
    }

    /// Human-readable name of the language, in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Russian",
            Language::Uz => "Uzbek",
        }
    }

    /// Parse a language code, falling back to English for unknown codes
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "uz" => Ok(Language::Uz),
            _ => Err(format!(
                "Invalid language: '{}'. Valid options: en, ru, uz",
                s
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A static UI phrase in all three languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub en: &'static str,
    pub ru: &'static str,
    pub uz: &'static str,
}

impl Phrase {
    pub const fn new(en: &'static str, ru: &'static str, uz: &'static str) -> Self {
        Self { en, ru, uz }
    }
}

/// Owned translated text; non-English variants are optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uz: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ru: impl Into<String>, uz: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ru: Some(ru.into()),
            uz: Some(uz.into()),
        }
    }

    /// Text that only exists in English
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ru: None,
            uz: None,
        }
    }

    pub fn with_ru(mut self, ru: impl Into<String>) -> Self {
        self.ru = Some(ru.into());
        self
    }

    pub fn with_uz(mut self, uz: impl Into<String>) -> Self {
        self.uz = Some(uz.into());
        self
    }
}

impl From<Phrase> for LocalizedText {
    fn from(phrase: Phrase) -> Self {
        LocalizedText::new(phrase.en, phrase.ru, phrase.uz)
    }
}

/// One word of the unit wordlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: String,
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub definitions: LocalizedText,
    pub examples: Vec<String>,
}

/// Slide kind tag
///
/// Carried by every descriptor for logging and debugging. Rendering never
/// dispatches on it; the descriptor's bound renderer is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Intro,
    ConversationSort,

    MfpIdiomIntro,
    MfpIdiomMeaning,
    MfpIdiomExamples,

    Idioms,
    SilenceExperiment,

    MfpSubjectQIntro,
    MfpSubjectQMeaning,
    MfpSubjectQExamples,

    GrammarSubjectObject,
    QuestionUnscramble,
    SectionBreak,
    CommTypes,

    MfpVocabStationeryIntro,
    MfpVocabStationeryMeaning,
    MfpVocabStationeryExamples,

    MfpGrammarPpcIntro,
    TimelineSimple,
    TimelineContinuous,
    MfpGrammarPpcMeaning,
    MfpGrammarPpcExamples,

    QuizResultActivity,

    LetterGrammar1,
    LetterGrammar2,

    MfpCollocationIntro,
    MfpCollocationMeaning,
    MfpCollocationExamples,

    Prepositions,
    EmailTask,

    VocabSectionIntro,
    VocabTeaching,
    VocabQuiz,
}

impl SlideKind {
    /// Whether descriptors of this kind are synthesized from the wordlist
    pub fn is_dynamic(&self) -> bool {
        matches!(self, SlideKind::VocabTeaching | SlideKind::VocabQuiz)
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("RU".parse::<Language>().unwrap(), Language::Ru);
        assert_eq!(" Uz ".parse::<Language>().unwrap(), Language::Uz);
    }

    #[test]
    fn test_language_from_str_invalid() {
        let result = "de".parse::<Language>();
        assert!(result.unwrap_err().contains("Invalid language: 'de'"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code_or_default("fr"), Language::En);
        assert_eq!(Language::from_code_or_default("uz"), Language::Uz);
    }

    #[test]
    fn test_language_display_round_trips_code() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string(), lang.code());
        }
    }

    #[test]
    fn test_dynamic_kinds() {
        assert!(SlideKind::VocabTeaching.is_dynamic());
        assert!(SlideKind::VocabQuiz.is_dynamic());
        assert!(!SlideKind::VocabSectionIntro.is_dynamic());
    }

    #[test]
    fn test_localized_text_deserializes_without_optional_languages() {
        let text: LocalizedText = toml::from_str(r#"en = "Hello""#).unwrap();
        assert_eq!(text, LocalizedText::english("Hello"));
    }
}
