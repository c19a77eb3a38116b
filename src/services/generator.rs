// src/services/generator.rs
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use super::gemini::GeminiClient;
use crate::config::Config;

/// Something that turns a single prompt into a single reply.
///
/// Calls are independent: no history is carried from one call to the next.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Stand-in used when the process started without an API key.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredGenerator;

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        bail!("GEMINI_API_KEY is not configured")
    }
}

pub fn build_generator(config: &Config) -> Result<Arc<dyn TextGenerator>> {
    match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone(), config.upstream_timeout)
                .context("failed to build HTTP client for Gemini")?
                .with_model(config.gemini_model.clone())
                .with_base_url(config.gemini_base_url.clone());
            Ok(Arc::new(client))
        }
        None => Ok(Arc::new(UnconfiguredGenerator)),
    }
}
