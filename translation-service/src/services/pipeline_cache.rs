//! Memoization of loaded translation pipelines.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::Mutex;

use crate::models::LanguagePair;
use crate::services::providers::{PipelineLoader, ProviderError, TranslationPipeline};

/// One slot per supported direction; eviction never triggers in practice.
pub const PIPELINE_CACHE_CAPACITY: usize = 2;

/// Bounded key→pipeline cache with LRU eviction. Entries live for the
/// process lifetime once created and are never invalidated.
pub struct PipelineCache {
    loader: Arc<dyn PipelineLoader>,
    pipelines: Mutex<LruCache<LanguagePair, Arc<dyn TranslationPipeline>>>,
}

impl PipelineCache {
    pub fn new(loader: Arc<dyn PipelineLoader>) -> Self {
        Self::with_capacity(loader, PIPELINE_CACHE_CAPACITY)
    }

    pub fn with_capacity(loader: Arc<dyn PipelineLoader>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            loader,
            pipelines: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Lookup-or-load. The lock is held across construction, so concurrent
    /// misses for the same pair perform exactly one load.
    pub async fn get(
        &self,
        pair: LanguagePair,
    ) -> Result<Arc<dyn TranslationPipeline>, ProviderError> {
        let mut pipelines = self.pipelines.lock().await;

        if let Some(pipeline) = pipelines.get(&pair) {
            tracing::debug!(pair = %pair, "Pipeline cache hit");
            return Ok(Arc::clone(pipeline));
        }

        let pipeline = self.loader.load(pair).await?;
        pipelines.put(pair, Arc::clone(&pipeline));
        Ok(pipeline)
    }
}
