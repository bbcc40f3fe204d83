//! Mock pipeline implementations for testing.

use super::{PipelineLoader, ProviderError, TranslationPipeline};
use crate::models::LanguagePair;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mock loader for testing. Loads are instant and counted.
pub struct MockPipelineLoader {
    enabled: bool,
    load_count: AtomicU64,
}

impl MockPipelineLoader {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            load_count: AtomicU64::new(0),
        }
    }

    pub fn load_count(&self) -> u64 {
        self.load_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PipelineLoader for MockPipelineLoader {
    async fn load(&self, pair: LanguagePair) -> Result<Arc<dyn TranslationPipeline>, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotEnabled(
                "Mock pipeline loader is not enabled".to_string(),
            ));
        }

        self.load_count.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            model = %pair.model_id(),
            "[MOCK] Translation pipeline would be loaded"
        );

        Ok(Arc::new(MockPipeline { pair }))
    }
}

/// Mock pipeline producing a deterministic, direction-tagged echo.
pub struct MockPipeline {
    pair: LanguagePair,
}

#[async_trait]
impl TranslationPipeline for MockPipeline {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        Ok(format!("[{}] {}", self.pair, text))
    }
}
