//! Transport trait definition.

use async_trait::async_trait;

use crate::http::errors::FetchError;

/// Asynchronous JSON GET against the device.
///
/// Views hold this as `Arc<dyn HttpGet>` so tests can script responses and
/// their timing.
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Fetch `path` (relative to the device base URL) and decode the body as JSON.
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct FixedBody(serde_json::Value);

    #[async_trait]
    impl HttpGet for FixedBody {
        async fn get_json(&self, _path: &str) -> Result<serde_json::Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_trait_object_usage() {
        let http: Arc<dyn HttpGet> = Arc::new(FixedBody(serde_json::json!({"ok": true})));
        let body = http.get_json("/status/latest.json").await.unwrap();
        assert_eq!(body["ok"], true);
    }
}
