//! Client error types

use thiserror::Error;

/// Error returned by every client operation
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, request serialization, or response body read failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON-RPC error object reported by the node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Response did not match the shape expected for the method
    #[error("Decode error in {method}: {message} (body: {body})")]
    Decode {
        /// RPC method whose reply failed to decode
        method: String,
        /// What went wrong
        message: String,
        /// Raw response body
        body: String,
    },

    /// `eth_sendRawTransaction` returned neither a hash nor an error object
    #[error("Unknown reply, no transaction hash and no error: {body}")]
    UnknownReply {
        /// Raw response body
        body: String,
    },

    /// Invalid private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Invalid chain ID
    #[error("Invalid chain ID: {0}")]
    InvalidChainId(String),
}

impl ClientError {
    /// Build a decode error for `method` from any displayable cause
    pub fn decode(method: &str, cause: impl std::fmt::Display, body: &[u8]) -> Self {
        ClientError::Decode {
            method: method.to_string(),
            message: cause.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl From<hex::FromHexError> for ClientError {
    fn from(e: hex::FromHexError) -> Self {
        ClientError::InvalidHex(e.to_string())
    }
}

impl From<ethrpc_crypto::CryptoError> for ClientError {
    fn from(e: ethrpc_crypto::CryptoError) -> Self {
        ClientError::SigningFailed(e.to_string())
    }
}
