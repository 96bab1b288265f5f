/*!
 * Mock adapter implementations for testing.
 *
 * This module provides mock adapters that simulate different behaviors:
 * - `MockAdapter::working()` - Always succeeds with marked translated text
 * - `MockAdapter::failing()` - Always fails with an error
 * - `MockAdapter::slow(delay_ms)` - Succeeds after a fixed delay (for timeout testing)
 * - `MockAdapter::panicking()` - Panics, simulating a crashed worker task
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::errors::AdapterError;

use super::{AdapterDetection, AdapterTranslation, LanguageEntry, TranslationAdapter};

/// Behavior mode for the mock adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a marked translation
    Working,
    /// Always fails with an error
    Failing,
    /// Simulates slow responses (for timeout testing)
    Slow {
        /// Delay before responding, in milliseconds
        delay_ms: u64,
    },
    /// Panics on translate, simulating a crashed worker task
    Panicking,
}

/// Mock adapter for exercising service behavior in tests
#[derive(Debug)]
pub struct MockAdapter {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls received
    translate_calls: Arc<AtomicUsize>,
}

impl MockAdapter {
    /// Create a new mock adapter with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            translate_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock adapter that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock adapter that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a slow mock adapter that responds after the given delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Create a mock adapter whose translate calls panic
    pub fn panicking() -> Self {
        Self::new(MockBehavior::Panicking)
    }

    /// Number of translate calls this adapter has received
    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    /// Shared handle to the translate call counter
    pub fn translate_calls_handle(&self) -> Arc<AtomicUsize> {
        self.translate_calls.clone()
    }
}

#[async_trait]
impl TranslationAdapter for MockAdapter {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<AdapterTranslation, AdapterError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {}
            MockBehavior::Failing => {
                return Err(AdapterError::RequestFailed(
                    "Mock adapter is configured to fail".to_string(),
                ));
            }
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            MockBehavior::Panicking => {
                panic!("mock adapter crashed");
            }
        }

        Ok(AdapterTranslation {
            translated_text: format!("[MOCK-{}] {}", target_language.to_uppercase(), text),
            detected_source_language: source_language.unwrap_or("en").to_string(),
            confidence: 1.0,
        })
    }

    async fn detect_language(&self, _text: &str) -> Result<AdapterDetection, AdapterError> {
        match self.behavior {
            MockBehavior::Failing => Err(AdapterError::RequestFailed(
                "Mock adapter is configured to fail".to_string(),
            )),
            _ => Ok(AdapterDetection {
                language: "fr".to_string(),
                confidence: 0.9,
            }),
        }
    }

    async fn list_languages(&self) -> Result<Vec<LanguageEntry>, AdapterError> {
        match self.behavior {
            MockBehavior::Failing => Err(AdapterError::RequestFailed(
                "Mock adapter is configured to fail".to_string(),
            )),
            _ => Ok(vec![
                LanguageEntry {
                    code: "fr".to_string(),
                    name: "Français".to_string(),
                },
                LanguageEntry {
                    code: "en".to_string(),
                    name: "English".to_string(),
                },
            ]),
        }
    }
}
