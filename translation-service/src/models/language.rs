use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the service translates between. The set is fixed at compile
/// time; the models backing it are pretrained per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("Only 'en' and 'hi' are supported.")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parses a language code, normalizing surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// An ordered (source, target) pair identifying a translation direction.
///
/// Only the two shipped directions can be constructed; each maps to a fixed
/// pretrained model identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    source: Language,
    target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Option<Self> {
        match (source, target) {
            (Language::En, Language::Hi) | (Language::Hi, Language::En) => {
                Some(Self { source, target })
            }
            _ => None,
        }
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }

    /// External model identifier for this direction.
    pub fn model_id(&self) -> &'static str {
        match (self.source, self.target) {
            (Language::En, Language::Hi) => "Helsinki-NLP/opus-mt-en-hi",
            (Language::Hi, Language::En) => "Helsinki-NLP/opus-mt-hi-en",
            // `new` admits no other combination.
            _ => unreachable!("unsupported language pair"),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_with_whitespace_and_case() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("  EN ".parse::<Language>().unwrap(), Language::En);
        assert_eq!("Hi".parse::<Language>().unwrap(), Language::Hi);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("english".parse::<Language>().is_err());
    }

    #[test]
    fn only_shipped_directions_construct() {
        assert!(LanguagePair::new(Language::En, Language::Hi).is_some());
        assert!(LanguagePair::new(Language::Hi, Language::En).is_some());
        assert!(LanguagePair::new(Language::En, Language::En).is_none());
        assert!(LanguagePair::new(Language::Hi, Language::Hi).is_none());
    }

    #[test]
    fn pairs_map_to_fixed_model_ids() {
        let en_hi = LanguagePair::new(Language::En, Language::Hi).unwrap();
        let hi_en = LanguagePair::new(Language::Hi, Language::En).unwrap();
        assert_eq!(en_hi.model_id(), "Helsinki-NLP/opus-mt-en-hi");
        assert_eq!(hi_en.model_id(), "Helsinki-NLP/opus-mt-hi-en");
        assert_eq!(en_hi.to_string(), "en->hi");
    }
}
