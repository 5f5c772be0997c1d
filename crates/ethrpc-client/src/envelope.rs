//! JSON-RPC 2.0 envelope encoding and decoding.
//!
//! Nodes answer HTTP 200 for both successes and failures and put the outcome
//! in the body, so error detection happens here rather than in the transport.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::params::Param;
use crate::ClientError;

/// Protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Id sent with every request. Calls are never multiplexed, so responses are
/// not correlated by id.
pub const REQUEST_ID: u64 = 1;

/// Outbound request envelope
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    /// Always [`JSONRPC_VERSION`]
    pub jsonrpc: &'static str,
    /// Method name
    pub method: &'a str,
    /// Positional parameters
    pub params: &'a [Param],
    /// Always [`REQUEST_ID`]
    pub id: u64,
}

impl<'a> RequestEnvelope<'a> {
    /// Build the envelope for `method` with `params`
    pub fn new(method: &'a str, params: &'a [Param]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: REQUEST_ID,
        }
    }

    /// Serialize to JSON bytes
    pub fn to_vec(&self) -> Result<Vec<u8>, ClientError> {
        serde_json::to_vec(self).map_err(|e| ClientError::Transport(e.to_string()))
    }
}

/// Error object carried by a failed response.
///
/// Both fields default to zero values, so a reply without an error object
/// decodes to `code == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorObject {
    /// Error code, `0` when absent
    #[serde(default)]
    pub code: i64,
    /// Error message, empty when absent
    #[serde(default)]
    pub message: String,
}

/// Error-shape view of any response. `jsonrpc`, `id` and `result` are
/// accepted and ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) error: Option<ErrorObject>,
}

impl ErrorEnvelope {
    pub(crate) fn parse(method: &str, raw: &[u8]) -> Result<Self, ClientError> {
        serde_json::from_slice(raw).map_err(|e| ClientError::decode(method, e, raw))
    }

    pub(crate) fn into_error(self) -> ErrorObject {
        self.error.unwrap_or_default()
    }
}

/// Success-shape view of a response, generic over the method's result type
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    /// Protocol version reported by the node
    #[serde(default)]
    pub jsonrpc: String,
    /// Id echoed by the node
    #[serde(default)]
    pub id: serde_json::Value,
    /// Method-specific result, `None` when absent or `null`
    pub result: Option<T>,
}

/// Check a raw reply for an embedded error object.
///
/// Returns the bytes unchanged when `error.code` is zero or missing, and
/// [`ClientError::Rpc`] otherwise, even when a `result` is also present.
///
/// An error object with code `0` and a non-empty message therefore counts as
/// success.
pub fn check(method: &str, raw: Bytes) -> Result<Bytes, ClientError> {
    let error = ErrorEnvelope::parse(method, &raw)?.into_error();
    if error.code != 0 {
        tracing::warn!(method, code = error.code, message = %error.message, "node returned RPC error");
        return Err(ClientError::Rpc {
            code: error.code,
            message: error.message,
        });
    }
    Ok(raw)
}

/// Decode the `result` field of a checked reply as `T`
pub fn decode_result<T: DeserializeOwned>(method: &str, raw: &[u8]) -> Result<Option<T>, ClientError> {
    let response: Response<T> =
        serde_json::from_slice(raw).map_err(|e| ClientError::decode(method, e, raw))?;
    Ok(response.result)
}
