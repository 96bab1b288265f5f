/*!
 * Tests for the core translation service: caching behavior, degraded
 * fallbacks, timeouts, catalog memoization and statistics.
 */

use std::sync::Arc;
use std::time::Duration;

use tuneme_translate::adapters::mock::MockAdapter;
use tuneme_translate::translation::{
    TranslationCache, TranslationOptions, TranslationRequest, TranslationService,
};

use crate::common::{TEST_TTL, mock_service, offline_service};

#[tokio::test]
async fn test_translateText_withRepeatedRequest_shouldServeSecondFromCache() {
    let (adapter, service) =
        mock_service(MockAdapter::working(), TranslationCache::in_memory(TEST_TTL));

    let request = TranslationRequest::new("Bonjour", "en", Some("fr"));
    let first = service.translate_text(&request).await;
    let second = service.translate_text(&request).await;

    assert_eq!(first.translated_text, second.translated_text);
    // Exactly one adapter call for two identical requests
    assert_eq!(adapter.translate_calls(), 1);
}

#[tokio::test]
async fn test_translateText_withDifferentTargets_shouldNotShareCacheEntries() {
    let (adapter, service) =
        mock_service(MockAdapter::working(), TranslationCache::in_memory(TEST_TTL));

    let to_en = TranslationRequest::new("Bonjour", "en", Some("fr"));
    let to_es = TranslationRequest::new("Bonjour", "es", Some("fr"));

    let en = service.translate_text(&to_en).await;
    let es = service.translate_text(&to_es).await;

    assert_eq!(adapter.translate_calls(), 2);
    assert_eq!(en.target_language, "en");
    assert_eq!(es.target_language, "es");
    assert_ne!(en.translated_text, es.translated_text);
}

#[tokio::test]
async fn test_translateText_withFailingAdapter_shouldReturnDegradedResult() {
    let (_, service) =
        mock_service(MockAdapter::failing(), TranslationCache::disabled(TEST_TTL));

    let request = TranslationRequest::new("Bonjour tout le monde", "en", Some("fr"));
    let result = service.translate_text(&request).await;

    assert_eq!(result.translated_text, "Bonjour tout le monde");
    assert_eq!(result.original_text, "Bonjour tout le monde");
    assert_eq!(result.target_language, "en");
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn test_translateText_withFailingAdapter_shouldNotCacheDegradedResult() {
    let (adapter, service) =
        mock_service(MockAdapter::failing(), TranslationCache::in_memory(TEST_TTL));

    let request = TranslationRequest::new("Bonjour", "en", Some("fr"));
    service.translate_text(&request).await;
    service.translate_text(&request).await;

    // A failed call writes nothing, so the adapter is retried every time
    assert_eq!(adapter.translate_calls(), 2);
    assert_eq!(service.cache.count_entries().await, Some(0));
}

#[tokio::test]
async fn test_translateText_withSlowAdapter_shouldTimeOutIntoDegradedResult() {
    let adapter = Arc::new(MockAdapter::slow(500));
    let options = TranslationOptions {
        request_timeout: Duration::from_millis(50),
        ..Default::default()
    };
    let service = TranslationService::new(
        adapter.clone(),
        TranslationCache::disabled(TEST_TTL),
        options,
    );

    let request = TranslationRequest::new("Bonjour", "en", Some("fr"));
    let result = service.translate_text(&request).await;

    assert_eq!(result.translated_text, "Bonjour");
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn test_translateText_withoutCacheBackend_shouldCallAdapterEveryTime() {
    let (adapter, service) =
        mock_service(MockAdapter::working(), TranslationCache::disabled(TEST_TTL));

    let request = TranslationRequest::new("Bonjour", "en", Some("fr"));
    let first = service.translate_text(&request).await;
    let second = service.translate_text(&request).await;

    assert_eq!(first, second);
    assert_eq!(adapter.translate_calls(), 2);
}

#[tokio::test]
async fn test_translateText_withMissingSource_shouldResolveSourceLanguage() {
    let service = offline_service();

    let request = TranslationRequest::new("Bonjour le monde et merci", "en", None);
    let result = service.translate_text(&request).await;

    assert_eq!(result.source_language, "fr");
    assert_eq!(result.target_language, "en");
}

#[tokio::test]
async fn test_detectLanguage_withFailingAdapter_shouldReturnDegradedDetection() {
    let (_, service) =
        mock_service(MockAdapter::failing(), TranslationCache::disabled(TEST_TTL));

    let detection = service.detect_language("Bonjour").await;

    assert_eq!(detection.detected_language, "en");
    assert_eq!(detection.confidence, 0.5);
}

#[tokio::test]
async fn test_supportedLanguages_withFailingAdapter_shouldReturnFallbackCatalog() {
    let (_, service) =
        mock_service(MockAdapter::failing(), TranslationCache::disabled(TEST_TTL));

    let languages = service.supported_languages().await;

    assert_eq!(languages.get("fr").map(String::as_str), Some("Français"));
    assert_eq!(languages.get("en").map(String::as_str), Some("English"));
    assert_eq!(languages.get("es").map(String::as_str), Some("Español"));
}

#[tokio::test]
async fn test_supportedLanguages_withRepeatedCalls_shouldMemoizeResolvedCatalog() {
    let (_, service) =
        mock_service(MockAdapter::working(), TranslationCache::disabled(TEST_TTL));

    let first = service.supported_languages().await;
    let second = service.supported_languages().await;

    assert_eq!(first, second);
    assert!(first.contains_key("fr"));
}

#[tokio::test]
async fn test_supportedLanguages_withClonedService_shouldShareMemo() {
    let (_, service) =
        mock_service(MockAdapter::working(), TranslationCache::disabled(TEST_TTL));
    let clone = service.clone();

    let from_original = service.supported_languages().await;
    let from_clone = clone.supported_languages().await;

    assert_eq!(from_original, from_clone);
}

#[tokio::test]
async fn test_stats_withoutCacheBackend_shouldReportCacheDisabled() {
    let (_, service) =
        mock_service(MockAdapter::working(), TranslationCache::disabled(TEST_TTL));

    let stats = service.stats().await;

    assert!(!stats.cache_enabled);
    assert!(stats.cached_translations.is_none());
    assert!(stats.cache_ttl_days.is_none());
    assert!(stats.error.is_none());
}

#[tokio::test]
async fn test_stats_withCacheBackend_shouldReportEntryCountAndTtl() {
    let (_, service) =
        mock_service(MockAdapter::working(), TranslationCache::in_memory(TEST_TTL));

    let request = TranslationRequest::new("Bonjour", "en", Some("fr"));
    service.translate_text(&request).await;

    let stats = service.stats().await;

    assert!(stats.cache_enabled);
    assert_eq!(stats.cached_translations, Some(1));
    assert_eq!(stats.cache_ttl_days, Some(7));
}
