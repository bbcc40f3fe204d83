use service_core::error::AppError;
use thiserror::Error;

use crate::services::providers::ProviderError;

/// Terminal per-request failures of the translation flow. No retries,
/// no recovery; each kind maps to one HTTP status at the boundary.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Source and target must be different languages.")]
    SameLanguage,

    #[error("Unsupported translation pair. Use en->hi or hi->en.")]
    UnsupportedPair,

    #[error("Translation error: {0}")]
    Model(#[from] ProviderError),

    #[error("Model returned empty translation.")]
    EmptyTranslation,
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::SameLanguage => AppError::BadRequest(anyhow::anyhow!(
                "Source and target must be different languages."
            )),
            TranslationError::UnsupportedPair => AppError::BadRequest(anyhow::anyhow!(
                "Unsupported translation pair. Use en->hi or hi->en."
            )),
            TranslationError::Model(e) => AppError::ModelError(anyhow::anyhow!(e)),
            TranslationError::EmptyTranslation => {
                AppError::InternalError(anyhow::anyhow!("Model returned empty translation."))
            }
        }
    }
}
