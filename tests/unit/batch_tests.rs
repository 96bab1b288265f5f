/*!
 * Tests for the batch pipeline: chunking, order preservation, pacing and
 * batch identification.
 */

use std::sync::Arc;
use std::time::Duration;

use tuneme_translate::adapters::mock::MockAdapter;
use tuneme_translate::adapters::offline::OfflineTranslator;
use tuneme_translate::errors::BatchError;
use tuneme_translate::translation::{
    BatchTranslator, TranslationCache, TranslationOptions, TranslationService,
};

use crate::common::{TEST_TTL, mock_service, offline_service};

fn offline_service_with_options(options: TranslationOptions) -> TranslationService {
    TranslationService::new(
        Arc::new(OfflineTranslator::new()),
        TranslationCache::disabled(TEST_TTL),
        options,
    )
}

fn numbered_texts(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("text number {}", i))
        .collect()
}

#[tokio::test]
async fn test_translateBatch_withElevenItems_shouldPreserveOrderAcrossChunks() {
    let translator = BatchTranslator::new(offline_service());
    let texts = numbered_texts(11);

    let outcome = translator.translate_batch(&texts, "en", Some("fr")).await.unwrap();

    assert_eq!(outcome.translations.len(), 11);
    for (i, result) in outcome.translations.iter().enumerate() {
        assert_eq!(result.original_text, texts[i]);
        assert_eq!(result.target_language, "en");
    }
}

#[tokio::test]
async fn test_translateBatch_withSmallChunks_shouldPreserveOrder() {
    let service = offline_service_with_options(TranslationOptions {
        chunk_size: 3,
        chunk_delay: Duration::from_millis(10),
        ..Default::default()
    });
    let translator = BatchTranslator::new(service);
    let texts = numbered_texts(7);

    let outcome = translator.translate_batch(&texts, "es", Some("fr")).await.unwrap();

    assert_eq!(outcome.translations.len(), 7);
    for (i, result) in outcome.translations.iter().enumerate() {
        assert_eq!(result.original_text, texts[i]);
    }
}

#[tokio::test]
async fn test_translateBatch_withMultipleChunks_shouldPaceBetweenChunks() {
    // 11 items with chunk size 10 is 2 chunks, so at least one 100ms pause
    let translator = BatchTranslator::new(offline_service());
    let texts = numbered_texts(11);

    let outcome = translator.translate_batch(&texts, "en", Some("fr")).await.unwrap();

    assert!(outcome.processing_time >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_translateBatch_withSingleChunk_shouldNotPaceAfterLastChunk() {
    let translator = BatchTranslator::new(offline_service());
    let texts = numbered_texts(5);

    let outcome = translator.translate_batch(&texts, "en", Some("fr")).await.unwrap();

    assert!(outcome.processing_time < Duration::from_millis(100));
}

#[tokio::test]
async fn test_translateBatch_withEmptyInput_shouldReturnEmptyOutcome() {
    let translator = BatchTranslator::new(offline_service());

    let outcome = translator.translate_batch(&[], "en", Some("fr")).await.unwrap();

    assert!(outcome.translations.is_empty());
    assert!(!outcome.batch_id.is_empty());
}

#[tokio::test]
async fn test_translateBatch_withAnyInput_shouldDeriveBatchIdFromSize() {
    let translator = BatchTranslator::new(offline_service());
    let texts = numbered_texts(11);

    let outcome = translator.translate_batch(&texts, "en", Some("fr")).await.unwrap();

    assert!(outcome.batch_id.starts_with("batch_11_"));
}

#[tokio::test]
async fn test_translateBatch_withKnownAndUnknownPhrases_shouldDegradePerItemOnly() {
    let translator = BatchTranslator::new(offline_service());
    let texts = vec![
        "Accueil".to_string(),
        "Bonsoir tout le monde".to_string(),
        "Musique".to_string(),
    ];

    let outcome = translator.translate_batch(&texts, "en", Some("fr")).await.unwrap();

    assert_eq!(outcome.translations[0].translated_text, "Home");
    assert_eq!(
        outcome.translations[1].translated_text,
        "[EN] Bonsoir tout le monde"
    );
    assert_eq!(outcome.translations[2].translated_text, "Music");
}

#[tokio::test]
async fn test_translateBatch_withFailingAdapter_shouldSucceedWithDegradedItems() {
    // Adapter errors are per-item fallbacks, never batch failures
    let (_, service) = mock_service(MockAdapter::failing(), TranslationCache::disabled(TEST_TTL));
    let translator = BatchTranslator::new(service);
    let texts = numbered_texts(3);

    let outcome = translator.translate_batch(&texts, "en", Some("fr")).await.unwrap();

    assert_eq!(outcome.translations.len(), 3);
    for (i, result) in outcome.translations.iter().enumerate() {
        assert_eq!(result.translated_text, texts[i]);
        assert_eq!(result.confidence, 0.0);
    }
}

#[tokio::test]
async fn test_translateBatch_withPanickingWorker_shouldReturnBatchError() {
    let (_, service) = mock_service(
        MockAdapter::panicking(),
        TranslationCache::disabled(TEST_TTL),
    );
    let translator = BatchTranslator::new(service);
    let texts = numbered_texts(3);

    let result = translator.translate_batch(&texts, "en", Some("fr")).await;

    assert!(matches!(result, Err(BatchError::WorkerFailed(_))));
}
