/*!
 * Tests for application configuration: defaults, validation and JSON
 * round-tripping.
 */

use tuneme_translate::app_config::Config;

#[test]
fn test_config_default_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert!(config.provider.api_key.is_none());
    assert_eq!(config.provider.timeout_secs, 30);
    assert!(config.cache.url.is_none());
    assert_eq!(config.cache.ttl_secs, 604_800);
    assert_eq!(config.batch.chunk_size, 10);
    assert_eq!(config.batch.chunk_delay_ms, 100);
}

#[test]
fn test_config_default_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_fromEmptyJson_shouldApplyAllDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.batch.chunk_size, 10);
    assert_eq!(config.cache.ttl_secs, 604_800);
}

#[test]
fn test_config_fromPartialJson_shouldKeepOtherDefaults() {
    let config: Config = serde_json::from_str(
        r#"{"batch": {"chunk_size": 5}, "cache": {"url": "redis://localhost:6379"}}"#,
    )
    .unwrap();

    assert_eq!(config.batch.chunk_size, 5);
    assert_eq!(config.batch.chunk_delay_ms, 100);
    assert_eq!(config.cache.url.as_deref(), Some("redis://localhost:6379"));
}

#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.batch.chunk_size = 4;
    config.provider.api_key = Some("key".to_string());

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.batch.chunk_size, 4);
    assert_eq!(parsed.provider.api_key.as_deref(), Some("key"));
}

#[test]
fn test_validate_withZeroChunkSize_shouldFail() {
    let mut config = Config::default();
    config.batch.chunk_size = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroTtl_shouldFail() {
    let mut config = Config::default();
    config.cache.ttl_secs = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withMalformedEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = "not a url".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withMalformedCacheUrl_shouldFail() {
    let mut config = Config::default();
    config.cache.url = Some("::".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn test_durations_shouldConvertFromRawFields() {
    let config = Config::default();

    assert_eq!(config.provider.timeout().as_secs(), 30);
    assert_eq!(config.cache.ttl().as_secs(), 604_800);
    assert_eq!(config.batch.chunk_delay().as_millis(), 100);
}
