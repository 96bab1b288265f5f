/*!
 * Translation service for the TuneMe platform.
 *
 * This module contains the core functionality for translating platform
 * content through a pluggable backend adapter. It is split into several
 * submodules:
 *
 * - `core`: Core translation service and result types
 * - `batch`: Chunked, paced batch processing of translations
 * - `cache`: Best-effort result caching over an external key-value store
 */

// Re-export main types for easier usage
pub use self::batch::{BatchOutcome, BatchTranslator};
pub use self::cache::{TranslationCache, fingerprint};
pub use self::core::{
    LanguageDetection, TranslationOptions, TranslationRequest, TranslationResult,
    TranslationService, TranslationStats,
};

// Submodules
pub mod batch;
pub mod cache;
pub mod core;
