use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Language;

#[derive(Debug, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(
        length(min = 1, max = 5000, message = "Text must be between 1 and 5000 characters."),
        custom(function = validate_text_not_blank)
    )]
    pub text: String,
    #[validate(custom(function = validate_language_code))]
    pub source: String,
    #[validate(custom(function = validate_language_code))]
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

fn validate_text_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Text cannot be empty.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if code.parse::<Language>().is_err() {
        let mut err = ValidationError::new("language_code");
        err.message = Some("Only 'en' and 'hi' are supported.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, source: &str, target: &str) -> TranslateRequest {
        TranslateRequest {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_requests() {
        assert!(request("Hello, world!", "en", "hi").validate().is_ok());
        assert!(request("  padded  ", " EN ", "Hi").validate().is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        assert!(request("", "en", "hi").validate().is_err());
        assert!(request("   \t  ", "en", "hi").validate().is_err());
    }

    #[test]
    fn rejects_overlong_text() {
        let long = "a".repeat(5001);
        assert!(request(&long, "en", "hi").validate().is_err());
        let bounded = "a".repeat(5000);
        assert!(request(&bounded, "en", "hi").validate().is_ok());
    }

    #[test]
    fn rejects_unknown_language_codes() {
        let err = request("hello", "fr", "en").validate().unwrap_err();
        assert!(err.field_errors().contains_key("source"));
        let err = request("hello", "en", "de").validate().unwrap_err();
        assert!(err.field_errors().contains_key("target"));
    }
}
