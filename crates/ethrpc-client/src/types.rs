//! Transaction, receipt and log objects as returned by the node.
//!
//! Every field is kept as the string the node sent. Fields that are `null`
//! for pending or contract-creating transactions are optional.

use serde::{Deserialize, Serialize};

/// Transaction object from `eth_getBlockByNumber(.., true)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Containing block hash, `None` while pending
    pub block_hash: Option<String>,
    /// Containing block number, `None` while pending
    pub block_number: Option<String>,
    /// Sender
    pub from: String,
    /// Gas limit
    pub gas: String,
    /// Gas price in wei
    pub gas_price: String,
    /// Transaction hash
    pub hash: String,
    /// Call data
    pub input: String,
    /// Sender nonce
    pub nonce: String,
    /// Recipient, `None` for contract creation
    pub to: Option<String>,
    /// Position in the block, `None` while pending
    pub transaction_index: Option<String>,
    /// Transferred value in wei
    pub value: String,
    /// Signature recovery value
    pub v: String,
    /// Signature r
    pub r: String,
    /// Signature s
    pub s: String,
}

/// Log entry emitted during execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Emitting contract
    pub address: String,
    /// Containing block hash, `None` while pending
    pub block_hash: Option<String>,
    /// Containing block number, `None` while pending
    pub block_number: Option<String>,
    /// Non-indexed event data
    pub data: String,
    /// Position in the block
    pub log_index: Option<String>,
    /// Indexed topics, in order
    pub topics: Vec<String>,
    /// Emitting transaction hash
    pub transaction_hash: Option<String>,
    /// Emitting transaction position
    pub transaction_index: Option<String>,
    /// Parity-specific
    #[serde(default)]
    pub transaction_log_index: Option<String>,
    /// Parity-specific (`"mined"` or `"pending"`)
    #[serde(default, rename = "type")]
    pub log_type: Option<String>,
}

/// Result of `eth_getTransactionReceipt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Containing block hash
    pub block_hash: String,
    /// Containing block number
    pub block_number: String,
    /// Created contract, `None` unless the transaction deployed one
    #[serde(default)]
    pub contract_address: Option<String>,
    /// Gas used by the block up to and including this transaction
    pub cumulative_gas_used: String,
    /// Gas used by this transaction
    pub gas_used: String,
    /// Logs, in emission order
    pub logs: Vec<Log>,
    /// Bloom filter over the logs
    pub logs_bloom: String,
    /// Post-state root (pre-Byzantium receipts)
    #[serde(default)]
    pub root: Option<String>,
    /// `0x1` on success, `0x0` on failure (post-Byzantium receipts)
    #[serde(default)]
    pub status: Option<String>,
    /// Transaction hash
    pub transaction_hash: String,
    /// Position in the block
    pub transaction_index: String,
}

impl Receipt {
    /// Whether the receipt reports success.
    ///
    /// `None` for receipts that carry a state root instead of a status code.
    pub fn succeeded(&self) -> Option<bool> {
        self.status.as_deref().map(|s| s != "0x0" && s != "0x")
    }
}
