/*!
 * Batch translation processing.
 *
 * This module chunks a list of texts into fixed-size groups, translates each
 * group's items concurrently, and paces successive groups with a short delay
 * so that very large lists do not overwhelm the backend. Output order always
 * matches input order, regardless of per-item completion timing.
 */

use chrono::Utc;
use futures::future::join_all;
use log::{debug, error};
use std::time::{Duration, Instant};

use crate::errors::BatchError;

use super::core::{TranslationRequest, TranslationResult, TranslationService};

/// Outcome of a batch translation
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// One result per input text, in input order
    pub translations: Vec<TranslationResult>,

    /// Opaque correlation token for this batch run
    pub batch_id: String,

    /// Total wall-clock processing time
    pub processing_time: Duration,
}

/// Batch translator for processing many texts against one language pair
pub struct BatchTranslator {
    /// The translation service to use
    service: TranslationService,

    /// Number of texts translated concurrently per chunk
    chunk_size: usize,

    /// Pause between successive chunks
    chunk_delay: Duration,
}

impl BatchTranslator {
    /// Create a new batch translator over the given service
    pub fn new(service: TranslationService) -> Self {
        Self {
            chunk_size: service.options.chunk_size.max(1),
            chunk_delay: service.options.chunk_delay,
            service,
        }
    }

    /// Translate a list of texts into the target language.
    ///
    /// Per-item failures degrade individually inside the service and never
    /// fail the batch; only a failure of the batch machinery itself (a
    /// panicked worker task) surfaces as an error.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<BatchOutcome, BatchError> {
        let started = Instant::now();
        let batch_id = Self::make_batch_id(texts.len());

        let chunk_count = texts.len().div_ceil(self.chunk_size);
        debug!(
            "Starting batch {} ({} texts, {} chunks)",
            batch_id,
            texts.len(),
            chunk_count
        );

        let mut translations = Vec::with_capacity(texts.len());

        for (chunk_index, chunk) in texts.chunks(self.chunk_size).enumerate() {
            // All items in the chunk run in parallel; the chunk completes
            // only when every item has completed
            let mut handles = Vec::with_capacity(chunk.len());
            for (item_index, text) in chunk.iter().enumerate() {
                let service = self.service.clone();
                let request =
                    TranslationRequest::new(text.clone(), target_language, source_language);
                handles.push(tokio::spawn(async move {
                    (item_index, service.translate_text(&request).await)
                }));
            }

            let mut chunk_results = Vec::with_capacity(chunk.len());
            for joined in join_all(handles).await {
                let (item_index, result) = joined.map_err(|e| {
                    error!("Batch {} worker failed: {}", batch_id, e);
                    BatchError::WorkerFailed(e.to_string())
                })?;
                chunk_results.push((item_index, result));
            }

            // Re-slot by index so the chunk result list matches input order
            chunk_results.sort_by_key(|(index, _)| *index);
            translations.extend(chunk_results.into_iter().map(|(_, result)| result));

            // Pace the backend between chunks, but not after the last one
            if chunk_index + 1 < chunk_count {
                tokio::time::sleep(self.chunk_delay).await;
            }
        }

        let processing_time = started.elapsed();
        debug!("Batch {} completed in {:?}", batch_id, processing_time);

        Ok(BatchOutcome {
            translations,
            batch_id,
            processing_time,
        })
    }

    /// Derive the opaque batch correlation token from the input size and
    /// start timestamp
    fn make_batch_id(item_count: usize) -> String {
        format!("batch_{}_{}", item_count, Utc::now().timestamp_millis())
    }
}
