//! Transport layer for RPC communication

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::envelope::RequestEnvelope;
use crate::params::Param;
use crate::ClientError;

/// Transport trait for RPC communication (object-safe)
///
/// A transport performs exactly one request/response exchange and returns
/// the raw reply body. It does not look inside the body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `method` with `params` and return the raw response body
    async fn call(&self, method: &str, params: &[Param]) -> Result<Bytes, ClientError>;
}

/// In-memory transport for tests.
///
/// Replies with a canned raw body per method and records every request
/// envelope it was asked to send.
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Bytes>>>,
    requests: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockTransport {
    /// Create a mock with no canned responses
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the raw body returned for `method`
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_response(&self, method: &str, body: impl Into<Bytes>) {
        self.responses
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(method.to_string(), body.into());
    }

    /// Set a `{"jsonrpc":"2.0","id":1,"result":...}` body for `method`
    pub fn set_result(&self, method: &str, result: serde_json::Value) {
        let body = serde_json::json!({ "jsonrpc": "2.0", "id": 1, "result": result });
        self.set_response(method, body.to_string());
    }

    /// Set a `{"jsonrpc":"2.0","id":1,"error":{...}}` body for `method`
    pub fn set_error(&self, method: &str, code: i64, message: &str) {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": code, "message": message },
        });
        self.set_response(method, body.to_string());
    }

    /// Serialized request envelopes, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .iter()
            .filter_map(|raw| serde_json::from_slice(raw).ok())
            .collect()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockTransport {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            requests: Arc::clone(&self.requests),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(&self, method: &str, params: &[Param]) -> Result<Bytes, ClientError> {
        let request = RequestEnvelope::new(method, params).to_vec()?;
        self.requests
            .lock()
            .map_err(|_| ClientError::Transport("MockTransport mutex poisoned".to_string()))?
            .push(request);

        let response = self
            .responses
            .lock()
            .map_err(|_| ClientError::Transport("MockTransport mutex poisoned".to_string()))?
            .get(method)
            .cloned();

        response.ok_or_else(|| {
            ClientError::Transport(format!("no mock response for method: {}", method))
        })
    }
}

/// HTTP transport posting JSON-RPC envelopes to one endpoint
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a transport with a default `reqwest::Client`
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a transport around a preconfigured `reqwest::Client`.
    ///
    /// Timeouts, proxies and TLS settings are taken from `client` as-is.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, params: &[Param]) -> Result<Bytes, ClientError> {
        let request = RequestEnvelope::new(method, params).to_vec()?;
        tracing::debug!(
            url = %self.url,
            request = %String::from_utf8_lossy(&request),
            "sending JSON-RPC request"
        );

        // status codes are not inspected, the envelope carries the outcome
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        tracing::debug!(method, body = %String::from_utf8_lossy(&body), "received reply");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_returns_raw_body() {
        let transport = MockTransport::new();
        transport.set_response("eth_chainId", r#"{"jsonrpc":"2.0","id":1,"result":"0x5"}"#);

        let body = transport.call("eth_chainId", &[]).await.unwrap();
        assert_eq!(&body[..], br#"{"jsonrpc":"2.0","id":1,"result":"0x5"}"#);
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockTransport::new();
        transport.set_result("eth_getBlockByNumber", serde_json::Value::Null);

        transport
            .call("eth_getBlockByNumber", &[Param::from("0x2"), Param::from(false)])
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "eth_getBlockByNumber",
                "params": ["0x2", false],
                "id": 1,
            })
        );
    }

    #[tokio::test]
    async fn test_mock_transport_unknown_method() {
        let transport = MockTransport::new();
        let result = transport.call("unknown_method", &[]).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
