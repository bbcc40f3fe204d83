use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub marian: MarianConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarianConfig {
    /// When false, the mock pipeline loader is installed instead of the
    /// Marian loader. Integration tests run with this disabled so no model
    /// weights are downloaded.
    pub enabled: bool,
}

impl TranslationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(TranslationConfig {
            common,
            marian: MarianConfig {
                enabled: env::var("MARIAN_ENABLED")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
            },
        })
    }
}
