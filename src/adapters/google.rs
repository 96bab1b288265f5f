use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::AdapterError;

use super::{AdapterDetection, AdapterTranslation, LanguageEntry, TranslationAdapter};

/// Confidence reported when the provider does not include one
const DEFAULT_CONFIDENCE: f64 = 0.9;

/// Google Cloud Translation v2 client
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Translate endpoint URL
    endpoint: String,
}

/// Translate request body for the v2 API
#[derive(Debug, Serialize)]
struct TranslateRequest {
    /// Text to translate
    q: String,
    /// Target language code
    target: String,
    /// Source language code (omitted for auto-detection)
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    /// Input format; "text" disables HTML entity handling
    format: String,
}

/// Envelope wrapping every v2 API response
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

/// Payload of a translate response
#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslationItem>,
}

/// A single translation in a translate response
#[derive(Debug, Deserialize)]
struct TranslationItem {
    #[serde(rename = "translatedText")]
    translated_text: String,
    #[serde(rename = "detectedSourceLanguage")]
    detected_source_language: Option<String>,
}

/// Payload of a detect response
#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Vec<DetectionItem>>,
}

/// A single detection candidate in a detect response
#[derive(Debug, Deserialize)]
struct DetectionItem {
    language: String,
    confidence: Option<f64>,
}

/// Payload of a languages response
#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<LanguageItem>,
}

/// A single supported language in a languages response
#[derive(Debug, Deserialize)]
struct LanguageItem {
    language: String,
    name: Option<String>,
}

impl GoogleTranslate {
    /// Create a new Google Translation client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AdapterError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AdapterError::AuthenticationError(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdapterError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.into(),
        })
    }

    /// POST a JSON body to a v2 API path and decode the response envelope
    async fn post<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AdapterError> {
        let api_url = format!("{}{}", self.endpoint.trim_end_matches('/'), path);

        let response = self
            .client
            .post(&api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| AdapterError::RequestFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation API error ({}): {}", status, error_text);
            return Err(AdapterError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| AdapterError::ParseError(e.to_string()))?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl TranslationAdapter for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<AdapterTranslation, AdapterError> {
        let request = TranslateRequest {
            q: text.to_string(),
            target: target_language.to_string(),
            source: source_language.map(|s| s.to_string()),
            format: "text".to_string(),
        };

        let data: TranslateData = self.post("", &request).await?;

        let item = data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| AdapterError::ParseError("Empty translations array".to_string()))?;

        Ok(AdapterTranslation {
            translated_text: item.translated_text,
            detected_source_language: item
                .detected_source_language
                .or_else(|| source_language.map(|s| s.to_string()))
                .unwrap_or_else(|| "auto".to_string()),
            confidence: DEFAULT_CONFIDENCE,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<AdapterDetection, AdapterError> {
        #[derive(Serialize)]
        struct DetectRequest {
            q: String,
        }

        let data: DetectData = self
            .post("/detect", &DetectRequest { q: text.to_string() })
            .await?;

        let item = data
            .detections
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| AdapterError::ParseError("Empty detections array".to_string()))?;

        Ok(AdapterDetection {
            language: item.language,
            confidence: item.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        })
    }

    async fn list_languages(&self) -> Result<Vec<LanguageEntry>, AdapterError> {
        #[derive(Serialize)]
        struct LanguagesRequest {
            /// Language in which to localize display names
            target: String,
        }

        let data: LanguagesData = self
            .post(
                "/languages",
                &LanguagesRequest {
                    target: "en".to_string(),
                },
            )
            .await?;

        Ok(data
            .languages
            .into_iter()
            .map(|l| LanguageEntry {
                name: l.name.unwrap_or_else(|| l.language.clone()),
                code: l.language,
            })
            .collect())
    }
}
