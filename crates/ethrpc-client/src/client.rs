//! Client - typed Ethereum JSON-RPC bindings

use bytes::Bytes;
use ethrpc_primitives::{hex_to_u256, parse_u64_auto, Address, H256, U256};
use serde::de::DeserializeOwned;

use crate::block::{Block, RawBlock};
use crate::envelope::{self, ErrorEnvelope};
use crate::params::{BlockTag, Param};
use crate::signer::SignedTransaction;
use crate::transport::Transport;
use crate::types::Receipt;
use crate::ClientError;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// JSON-RPC client bound to one transport
pub struct Client {
    transport: Box<dyn Transport>,
}

impl Client {
    /// Create a client posting to `url` over HTTP
    #[cfg(feature = "http")]
    pub fn new_http(url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(url))
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Send `method` with `params` and return the raw reply body.
    ///
    /// The reply has already been checked for an error object, so the body
    /// holds a result (or nothing).
    pub async fn call(&self, method: &str, params: &[Param]) -> Result<Bytes, ClientError> {
        let raw = self.transport.call(method, params).await?;
        envelope::check(method, raw)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[Param],
    ) -> Result<(Option<T>, Bytes), ClientError> {
        let raw = self.call(method, params).await?;
        let result = envelope::decode_result(method, &raw)?;
        Ok((result, raw))
    }

    /// Like `request`, but a missing or `null` result is a decode error
    async fn request_required<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[Param],
    ) -> Result<(T, Bytes), ClientError> {
        match self.request(method, params).await? {
            (Some(result), raw) => Ok((result, raw)),
            (None, raw) => Err(ClientError::decode(method, "missing result", &raw)),
        }
    }

    // ==================== Account Queries ====================

    /// Number of transactions sent from `address` (`eth_getTransactionCount`)
    pub async fn get_transaction_count(
        &self,
        address: &Address,
        block: BlockTag,
    ) -> Result<u64, ClientError> {
        const METHOD: &str = "eth_getTransactionCount";
        let (result, raw): (String, _) = self
            .request_required(METHOD, &[address.into(), block.into()])
            .await?;
        parse_u64_auto(&result).map_err(|e| ClientError::decode(METHOD, e, &raw))
    }

    /// Balance of `address` in wei (`eth_getBalance`)
    pub async fn get_balance(&self, address: &Address, block: BlockTag) -> Result<U256, ClientError> {
        const METHOD: &str = "eth_getBalance";
        let (result, raw): (String, _) = self
            .request_required(METHOD, &[address.into(), block.into()])
            .await?;
        hex_to_u256(&result).map_err(|e| ClientError::decode(METHOD, e, &raw))
    }

    // ==================== Transaction Submission ====================

    /// Submit a signed transaction given as hex (`eth_sendRawTransaction`).
    ///
    /// Returns the transaction hash reported by the node. A reply with an
    /// empty or missing result and no error code fails with
    /// [`ClientError::UnknownReply`].
    pub async fn send_raw_transaction(&self, signed_tx_hex: &str) -> Result<String, ClientError> {
        const METHOD: &str = "eth_sendRawTransaction";
        let (hash, raw): (Option<String>, _) = self.request(METHOD, &[signed_tx_hex.into()]).await?;
        match hash {
            Some(hash) if !hash.is_empty() => Ok(hash),
            _ => {
                let error = ErrorEnvelope::parse(METHOD, &raw)?.into_error();
                if error.code != 0 {
                    return Err(ClientError::Rpc {
                        code: error.code,
                        message: error.message,
                    });
                }
                Err(ClientError::UnknownReply {
                    body: String::from_utf8_lossy(&raw).into_owned(),
                })
            }
        }
    }

    /// Submit a transaction signed with [`crate::Eip155Signer`]
    pub async fn send_transaction(&self, tx: &SignedTransaction) -> Result<String, ClientError> {
        self.send_raw_transaction(&tx.to_hex()).await
    }

    // ==================== Chain Info ====================

    /// Network id (`net_version`)
    pub async fn net_version(&self) -> Result<i64, ClientError> {
        const METHOD: &str = "net_version";
        let (result, raw): (String, _) = self.request_required(METHOD, &[]).await?;
        result
            .parse::<i64>()
            .map_err(|e| ClientError::decode(METHOD, e, &raw))
    }

    /// Height of the most recent block (`eth_blockNumber`)
    pub async fn block_number(&self) -> Result<U256, ClientError> {
        const METHOD: &str = "eth_blockNumber";
        let (result, raw): (String, _) = self.request_required(METHOD, &[]).await?;
        hex_to_u256(&result).map_err(|e| ClientError::decode(METHOD, e, &raw))
    }

    // ==================== Block & Receipt Queries ====================

    /// Block at `block` (`eth_getBlockByNumber`).
    ///
    /// `include_transactions` selects full transaction objects over hashes,
    /// and also decides how the reply's `transactions` field is decoded.
    /// Returns `None` when the node has no such block.
    pub async fn get_block_by_number(
        &self,
        block: BlockTag,
        include_transactions: bool,
    ) -> Result<Option<Block>, ClientError> {
        const METHOD: &str = "eth_getBlockByNumber";
        let (raw_block, raw): (Option<RawBlock>, _) = self
            .request(METHOD, &[block.into(), include_transactions.into()])
            .await?;
        raw_block
            .map(|b| b.into_block(include_transactions))
            .transpose()
            .map_err(|e| ClientError::decode(METHOD, e, &raw))
    }

    /// Receipt of the transaction `hash` (`eth_getTransactionReceipt`).
    ///
    /// Returns `None` for unknown or pending transactions.
    pub async fn get_transaction_receipt(&self, hash: &H256) -> Result<Option<Receipt>, ClientError> {
        let (receipt, _): (Option<Receipt>, _) = self
            .request("eth_getTransactionReceipt", &[hash.into()])
            .await?;
        Ok(receipt)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
