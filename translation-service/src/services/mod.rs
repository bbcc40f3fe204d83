pub mod error;
pub mod pipeline_cache;
pub mod providers;

pub use error::TranslationError;
pub use pipeline_cache::PipelineCache;
pub use providers::{MarianPipelineLoader, MockPipelineLoader, PipelineLoader, TranslationPipeline};
