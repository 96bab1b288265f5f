/*!
 * # tuneme-translate
 *
 * Translation subsystem for the TuneMe music platform: a cache-backed,
 * batch-capable translation service over a pluggable backend.
 *
 * ## Features
 *
 * - Single and batch text translation with write-through result caching
 * - Pluggable backends: live Google Cloud Translation, or a deterministic
 *   offline adapter when no credentials are configured
 * - Language detection and a memoized supported-language catalog
 * - Best-effort degradation: adapter and cache failures produce degraded
 *   results, never errors, at the service boundary
 * - Chunked batch fan-out with inter-chunk pacing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `adapters`: Backend adapter contract and implementations:
 *   - `adapters::google`: Google Cloud Translation v2 client
 *   - `adapters::offline`: Deterministic offline adapter
 *   - `adapters::mock`: Instrumented adapter for tests
 * - `translation`: Service orchestration:
 *   - `translation::core`: Core translation service
 *   - `translation::batch`: Batch processing of translations
 *   - `translation::cache`: Caching over an external key-value store
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod adapters;
pub mod app_config;
pub mod errors;
pub mod translation;

// Re-export main types for easier usage
pub use adapters::{TranslationAdapter, create_adapter};
pub use app_config::Config;
pub use errors::{AdapterError, AppError, BatchError};
pub use translation::{
    BatchOutcome, BatchTranslator, LanguageDetection, TranslationCache, TranslationRequest,
    TranslationResult, TranslationService, TranslationStats,
};
