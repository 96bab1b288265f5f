/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct and its
 * implementation, which orchestrates the backend adapter and the cache for
 * single translations, language detection, the supported-language catalog and
 * service statistics.
 *
 * Translation is best-effort: a failing or hung adapter call produces a
 * degraded result (original text back, confidence 0.0) instead of an error,
 * so a bad translation never aborts a caller's request.
 */

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::adapters::TranslationAdapter;
use crate::app_config::Config;

use super::cache::{TranslationCache, fingerprint};

/// A single translation request. Immutable value.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,

    /// Target language code
    pub target_language: String,

    /// Source language code; None means auto-detect
    pub source_language: Option<String>,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        target_language: impl Into<String>,
        source_language: Option<&str>,
    ) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: source_language.map(|s| s.to_string()),
        }
    }
}

/// A completed translation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// The original input text
    pub original_text: String,

    /// The translated text; equals the original on a degraded result
    pub translated_text: String,

    /// Resolved source language code
    pub source_language: String,

    /// Target language code; always equals the request's target
    pub target_language: String,

    /// Confidence in [0, 1]; 0.0 marks a degraded result
    pub confidence: f64,
}

impl TranslationResult {
    /// Build the degraded fallback result for a request whose adapter call
    /// failed or timed out
    fn degraded(request: &TranslationRequest) -> Self {
        Self {
            original_text: request.text.clone(),
            translated_text: request.text.clone(),
            source_language: request
                .source_language
                .clone()
                .unwrap_or_else(|| "auto".to_string()),
            target_language: request.target_language.clone(),
            confidence: 0.0,
        }
    }
}

/// Result of a language detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetection {
    /// Detected language code
    pub detected_language: String,

    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Introspection data about the translation service
#[derive(Debug, Clone, Serialize)]
pub struct TranslationStats {
    /// Whether a live cache backend is configured
    pub cache_enabled: bool,

    /// Number of cached translations, when the backend is reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_translations: Option<usize>,

    /// Configured entry time-to-live in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl_days: Option<u64>,

    /// Backend error detail, when key counting failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Translation options for customizing the translation process
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Per-call adapter timeout; a stuck call becomes a degraded result
    pub request_timeout: Duration,

    /// Number of texts translated concurrently per batch chunk
    pub chunk_size: usize,

    /// Pause between successive batch chunks
    pub chunk_delay: Duration,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            chunk_size: 10,
            chunk_delay: Duration::from_millis(100),
        }
    }
}

impl TranslationOptions {
    /// Build options from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            request_timeout: config.provider.timeout(),
            chunk_size: config.batch.chunk_size,
            chunk_delay: config.batch.chunk_delay(),
        }
    }
}

/// Small hardcoded catalog returned when the adapter cannot enumerate
/// languages
const FALLBACK_CATALOG: &[(&str, &str)] = &[
    ("fr", "Français"),
    ("en", "English"),
    ("es", "Español"),
    ("de", "Deutsch"),
    ("pt", "Português"),
    ("ar", "العربية"),
    ("sw", "Kiswahili"),
];

/// Main translation service
pub struct TranslationService {
    /// Backend adapter
    adapter: Arc<dyn TranslationAdapter>,

    /// Best-effort result cache
    pub cache: TranslationCache,

    /// Translation options
    pub options: TranslationOptions,

    /// Supported-language catalog, fetched once per process and memoized as
    /// a resolved value
    languages: Arc<OnceCell<HashMap<String, String>>>,
}

impl Clone for TranslationService {
    fn clone(&self) -> Self {
        Self {
            adapter: self.adapter.clone(),
            cache: self.cache.clone(),
            options: self.options.clone(),
            languages: self.languages.clone(),
        }
    }
}

impl TranslationService {
    /// Create a new translation service over the given adapter and cache
    pub fn new(
        adapter: Arc<dyn TranslationAdapter>,
        cache: TranslationCache,
        options: TranslationOptions,
    ) -> Self {
        Self {
            adapter,
            cache,
            options,
            languages: Arc::new(OnceCell::new()),
        }
    }

    /// Build a service from the application configuration, selecting the
    /// adapter and connecting the cache
    pub async fn from_config(config: &Config) -> Self {
        let adapter = crate::adapters::create_adapter(&config.provider);
        let cache =
            TranslationCache::connect(config.cache.url.as_deref(), config.cache.ttl()).await;
        Self::new(adapter, cache, TranslationOptions::from_config(config))
    }

    /// Translate a single text. Never fails.
    ///
    /// Cache hits are returned without touching the adapter. On a miss the
    /// adapter is called under the configured timeout and the result is
    /// written through to the cache. Any adapter failure or timeout yields
    /// the degraded result instead.
    pub async fn translate_text(&self, request: &TranslationRequest) -> TranslationResult {
        let key = fingerprint(
            &request.text,
            request.source_language.as_deref(),
            &request.target_language,
        );

        if let Some(raw) = self.cache.get(&key).await {
            match serde_json::from_str::<TranslationResult>(&raw) {
                Ok(cached) => return cached,
                Err(e) => warn!("Discarding undecodable cache entry {}: {}", key, e),
            }
        }

        let call = self.adapter.translate(
            &request.text,
            &request.target_language,
            request.source_language.as_deref(),
        );

        let translation = match tokio::time::timeout(self.options.request_timeout, call).await {
            Ok(Ok(translation)) => translation,
            Ok(Err(e)) => {
                warn!(
                    "Translation failed for target '{}': {}",
                    request.target_language, e
                );
                return TranslationResult::degraded(request);
            }
            Err(_) => {
                warn!(
                    "Translation timed out after {:?} for target '{}'",
                    self.options.request_timeout, request.target_language
                );
                return TranslationResult::degraded(request);
            }
        };

        let result = TranslationResult {
            original_text: request.text.clone(),
            translated_text: translation.translated_text,
            source_language: translation.detected_source_language,
            target_language: request.target_language.clone(),
            confidence: translation.confidence,
        };

        match serde_json::to_string(&result) {
            Ok(serialized) => self.cache.put(&key, &serialized).await,
            Err(e) => warn!("Failed to serialize result for caching: {}", e),
        }

        result
    }

    /// Detect the language of a text. Never fails.
    ///
    /// Detection is advisory: on adapter failure or timeout a degraded
    /// detection of English at half confidence is returned.
    pub async fn detect_language(&self, text: &str) -> LanguageDetection {
        let call = self.adapter.detect_language(text);

        match tokio::time::timeout(self.options.request_timeout, call).await {
            Ok(Ok(detection)) => LanguageDetection {
                detected_language: detection.language,
                confidence: detection.confidence,
            },
            Ok(Err(e)) => {
                warn!("Language detection failed: {}", e);
                Self::degraded_detection()
            }
            Err(_) => {
                warn!(
                    "Language detection timed out after {:?}",
                    self.options.request_timeout
                );
                Self::degraded_detection()
            }
        }
    }

    fn degraded_detection() -> LanguageDetection {
        LanguageDetection {
            detected_language: "en".to_string(),
            confidence: 0.5,
        }
    }

    /// Get the supported-language catalog as a code-to-name mapping.
    ///
    /// The catalog is fetched from the adapter at most once per process and
    /// memoized for the process lifetime. On adapter failure the small
    /// hardcoded fallback catalog is used instead.
    pub async fn supported_languages(&self) -> HashMap<String, String> {
        self.languages
            .get_or_init(|| async {
                match self.adapter.list_languages().await {
                    Ok(entries) => entries
                        .into_iter()
                        .map(|entry| (entry.code, entry.name))
                        .collect(),
                    Err(e) => {
                        warn!("Failed to fetch language catalog ({}), using fallback", e);
                        FALLBACK_CATALOG
                            .iter()
                            .map(|(code, name)| (code.to_string(), name.to_string()))
                            .collect()
                    }
                }
            })
            .await
            .clone()
    }

    /// Get introspection statistics about the service and its cache
    pub async fn stats(&self) -> TranslationStats {
        if !self.cache.is_enabled() {
            return TranslationStats {
                cache_enabled: false,
                cached_translations: None,
                cache_ttl_days: None,
                error: None,
            };
        }

        match self.cache.count_entries().await {
            Some(count) => TranslationStats {
                cache_enabled: true,
                cached_translations: Some(count),
                cache_ttl_days: Some(self.cache.ttl_days()),
                error: None,
            },
            None => TranslationStats {
                cache_enabled: true,
                cached_translations: None,
                cache_ttl_days: Some(self.cache.ttl_days()),
                error: Some("cache backend unreachable".to_string()),
            },
        }
    }
}
