/*!
 * Adapter implementations for translation backends.
 *
 * This module contains the backend capability contract and its implementations:
 * - Google: live Google Cloud Translation v2 client
 * - Offline: deterministic phrase-table adapter for offline environments and tests
 * - Mock: instrumented adapter for exercising failure paths in tests
 */

use async_trait::async_trait;
use log::warn;
use std::fmt::Debug;
use std::sync::Arc;

use crate::app_config::ProviderConfig;
use crate::errors::AdapterError;

/// A single translation produced by an adapter
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterTranslation {
    /// Translated text
    pub translated_text: String,
    /// Source language the backend resolved (requested or detected)
    pub detected_source_language: String,
    /// Backend-reported confidence in [0, 1]
    pub confidence: f64,
}

/// A language detection produced by an adapter
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterDetection {
    /// Detected language code
    pub language: String,
    /// Backend-reported confidence in [0, 1]
    pub confidence: f64,
}

/// One entry of the supported-language catalog
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageEntry {
    /// ISO language code
    pub code: String,
    /// Human-readable display name
    pub name: String,
}

/// Common trait for all translation backends
///
/// This trait defines the capability set that all backend implementations
/// must provide, allowing them to be used interchangeably by the translation
/// service. Adapters either succeed or return an error; degradation policy
/// lives at the service boundary, not here.
#[async_trait]
pub trait TranslationAdapter: Send + Sync + Debug {
    /// Translate a single text into the target language
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target_language` - Target language code
    /// * `source_language` - Source language code, or None to auto-detect
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<AdapterTranslation, AdapterError>;

    /// Detect the language of a text
    async fn detect_language(&self, text: &str) -> Result<AdapterDetection, AdapterError>;

    /// Enumerate the languages this backend supports
    async fn list_languages(&self) -> Result<Vec<LanguageEntry>, AdapterError>;
}

/// Select the backend adapter for the given provider configuration.
///
/// The live provider is chosen only when an API key is available (config or
/// environment); otherwise, and when live client construction fails, the
/// offline deterministic adapter is substituted so that the service never
/// fails to start over missing credentials.
pub fn create_adapter(config: &ProviderConfig) -> Arc<dyn TranslationAdapter> {
    match config.resolve_api_key() {
        Some(api_key) => match google::GoogleTranslate::new(api_key, config.endpoint.clone(), config.timeout()) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                warn!("Failed to construct live translation client ({}), using offline adapter", e);
                Arc::new(offline::OfflineTranslator::new())
            }
        },
        None => {
            warn!("No translation provider credentials configured, using offline adapter");
            Arc::new(offline::OfflineTranslator::new())
        }
    }
}

pub mod google;
pub mod mock;
pub mod offline;
