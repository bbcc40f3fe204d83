pub mod language;
pub mod translation;

pub use language::{Language, LanguagePair, UnknownLanguage};
pub use translation::{TranslateRequest, TranslateResponse};
