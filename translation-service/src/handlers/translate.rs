use axum::{Json, extract::State};
use validator::Validate;

use crate::models::{Language, LanguagePair, TranslateRequest, TranslateResponse};
use crate::services::TranslationError;
use crate::startup::AppState;
use service_core::error::AppError;

/// POST /translate. Validation → pair checks → cached pipeline → inference
/// → post-processing. Every failure is terminal for the request.
#[tracing::instrument(skip(state, request))]
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    request.validate()?;

    let text = request.text.trim();
    let source: Language = request
        .source
        .parse()
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;
    let target: Language = request
        .target
        .parse()
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    if source == target {
        return Err(TranslationError::SameLanguage.into());
    }

    let pair = LanguagePair::new(source, target).ok_or(TranslationError::UnsupportedPair)?;

    let pipeline = state
        .pipelines
        .get(pair)
        .await
        .map_err(TranslationError::Model)?;

    let translated = pipeline
        .translate(text)
        .await
        .map_err(TranslationError::Model)?;

    let translated = translated.trim();
    if translated.is_empty() {
        return Err(TranslationError::EmptyTranslation.into());
    }

    tracing::info!(pair = %pair, "Translation completed");

    Ok(Json(TranslateResponse {
        translated_text: translated.to_string(),
    }))
}
