//! Marian pipeline implementation backed by rust-bert.
//!
//! Each direction uses the pretrained Opus-MT weights named by
//! `LanguagePair::model_id`. The Marian generation config bounds output at
//! 512 tokens and the tokenizer truncates overlong input.

use super::{PipelineLoader, ProviderError, TranslationPipeline};
use crate::models::{Language, LanguagePair};
use async_trait::async_trait;
use rust_bert::RustBertError;
use rust_bert::pipelines::common::ModelType;
use rust_bert::pipelines::translation::{
    Language as ModelLanguage, TranslationModel, TranslationModelBuilder,
};
use std::sync::{Arc, Mutex};

/// Loads Marian models through the model hub. First load per direction
/// downloads tokenizer and weights, which can take seconds to minutes.
pub struct MarianPipelineLoader;

impl MarianPipelineLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarianPipelineLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PipelineLoader for MarianPipelineLoader {
    async fn load(&self, pair: LanguagePair) -> Result<Arc<dyn TranslationPipeline>, ProviderError> {
        tracing::info!(model = %pair.model_id(), "Loading Marian translation model");

        let model = tokio::task::spawn_blocking(move || build_model(pair))
            .await
            .map_err(|e| ProviderError::LoadFailed(format!("Model loading task failed: {}", e)))?
            .map_err(|e| ProviderError::LoadFailed(e.to_string()))?;

        Ok(Arc::new(MarianPipeline {
            pair,
            model: Arc::new(Mutex::new(model)),
        }))
    }
}

fn build_model(pair: LanguagePair) -> Result<TranslationModel, RustBertError> {
    TranslationModelBuilder::new()
        .with_model_type(ModelType::Marian)
        .with_source_languages(vec![model_language(pair.source())])
        .with_target_languages(vec![model_language(pair.target())])
        .create_model()
}

fn model_language(language: Language) -> ModelLanguage {
    match language {
        Language::En => ModelLanguage::English,
        Language::Hi => ModelLanguage::Hindi,
    }
}

/// A loaded Marian model bound to one direction.
pub struct MarianPipeline {
    pair: LanguagePair,
    // The tch-backed model is not Sync; calls for a direction are serialized
    // and run on the blocking thread pool.
    model: Arc<Mutex<TranslationModel>>,
}

#[async_trait]
impl TranslationPipeline for MarianPipeline {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();
        let source = model_language(self.pair.source());
        let target = model_language(self.pair.target());

        let output = tokio::task::spawn_blocking(move || -> Result<String, String> {
            let model = model
                .lock()
                .map_err(|_| "translation model lock poisoned".to_string())?;
            let outputs = model
                .translate(&[text.as_str()], source, target)
                .map_err(|e| e.to_string())?;
            Ok(outputs.into_iter().next().unwrap_or_default())
        })
        .await
        .map_err(|e| ProviderError::InferenceFailed(format!("Inference task failed: {}", e)))?
        .map_err(ProviderError::InferenceFailed)?;

        Ok(output)
    }
}
