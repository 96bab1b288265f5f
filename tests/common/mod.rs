/*!
 * Common test utilities for the tuneme-translate test suite
 */

use std::sync::Arc;
use std::time::Duration;

use tuneme_translate::adapters::mock::MockAdapter;
use tuneme_translate::adapters::offline::OfflineTranslator;
use tuneme_translate::translation::{TranslationCache, TranslationOptions, TranslationService};

/// Default TTL used by test caches
pub const TEST_TTL: Duration = Duration::from_secs(604_800);

/// Route log output through the test harness; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a service over the offline adapter with no cache backend
pub fn offline_service() -> TranslationService {
    init_test_logging();
    TranslationService::new(
        Arc::new(OfflineTranslator::new()),
        TranslationCache::disabled(TEST_TTL),
        TranslationOptions::default(),
    )
}

/// Build a service over the offline adapter with an in-memory cache
pub fn offline_service_with_cache() -> TranslationService {
    init_test_logging();
    TranslationService::new(
        Arc::new(OfflineTranslator::new()),
        TranslationCache::in_memory(TEST_TTL),
        TranslationOptions::default(),
    )
}

/// Build a service over the given mock adapter, keeping a handle to it for
/// call-count assertions
pub fn mock_service(adapter: MockAdapter, cache: TranslationCache) -> (Arc<MockAdapter>, TranslationService) {
    init_test_logging();
    let adapter = Arc::new(adapter);
    let service = TranslationService::new(
        adapter.clone(),
        cache,
        TranslationOptions::default(),
    );
    (adapter, service)
}
