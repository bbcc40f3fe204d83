//! Model toolkit abstractions and implementations.
//!
//! This module is the only seam to the external model runtime: a loader
//! that materializes a tokenizer+model pair for one translation direction,
//! and the pipeline interface the handler invokes. A mock pair stands in
//! for tests.

pub mod marian;
pub mod mock;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::LanguagePair;

pub use marian::MarianPipelineLoader;
pub use mock::{MockPipeline, MockPipelineLoader};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not enabled: {0}")]
    NotEnabled(String),

    #[error("Model load failed: {0}")]
    LoadFailed(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

/// A loaded tokenizer+model pair bound to one fixed translation direction.
///
/// `translate` is a single blocking call into the model runtime; there is
/// no cancellation and no timeout, the call returns when the runtime does.
#[async_trait]
pub trait TranslationPipeline: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}

/// Materializes pipelines on demand. First load for a direction fetches
/// model weights (network/disk I/O, seconds to minutes); callers memoize.
#[async_trait]
pub trait PipelineLoader: Send + Sync {
    async fn load(&self, pair: LanguagePair) -> Result<Arc<dyn TranslationPipeline>, ProviderError>;
}
