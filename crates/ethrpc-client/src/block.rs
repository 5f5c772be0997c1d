//! Block decoding.
//!
//! `eth_getBlockByNumber` returns either transaction hashes or full
//! transaction objects in `transactions`, depending on the flag the caller
//! sent. The flag, not the payload, decides how the field is decoded.

use ethrpc_primitives::{hex_to_u256, u256_to_hex, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::Transaction;

/// Transactions of a block, in block order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    /// Transaction hashes (`include_transactions == false`)
    Hashes(Vec<String>),
    /// Full transaction objects (`include_transactions == true`)
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    /// Number of transactions
    pub fn len(&self) -> usize {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.len(),
            BlockTransactions::Full(txs) => txs.len(),
        }
    }

    /// Whether the block has no transactions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transaction hashes, whichever variant is held
    pub fn hashes(&self) -> Vec<&str> {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.iter().map(String::as_str).collect(),
            BlockTransactions::Full(txs) => txs.iter().map(|tx| tx.hash.as_str()).collect(),
        }
    }
}

/// Decoded block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block hash, `None` for a pending block
    pub hash: Option<String>,
    /// Parent block hash
    pub parent_hash: String,
    /// Beneficiary
    pub miner: Option<String>,
    /// State trie root
    pub state_root: String,
    /// Mix hash (absent on some chains)
    pub mix_hash: Option<String>,
    /// Receipt trie root
    pub receipts_root: String,
    /// Uncle list hash
    pub sha3_uncles: String,
    /// Transaction trie root
    pub transactions_root: String,
    /// Bloom filter over the block's logs
    pub logs_bloom: Option<String>,
    /// Extra data
    pub extra_data: String,
    /// Unix timestamp, as sent by the node
    pub timestamp: String,
    /// Difficulty
    #[serde(serialize_with = "serialize_u256")]
    pub difficulty: U256,
    /// Gas limit
    #[serde(serialize_with = "serialize_u256")]
    pub gas_limit: U256,
    /// Gas used
    #[serde(serialize_with = "serialize_u256")]
    pub gas_used: U256,
    /// Proof-of-work nonce, `None` for a pending block
    #[serde(serialize_with = "serialize_opt_u256")]
    pub nonce: Option<U256>,
    /// Block height, `None` for a pending block
    #[serde(serialize_with = "serialize_opt_u256")]
    pub number: Option<U256>,
    /// Encoded size in bytes
    #[serde(serialize_with = "serialize_u256")]
    pub size: U256,
    /// Total chain difficulty up to this block
    #[serde(serialize_with = "serialize_opt_u256")]
    pub total_difficulty: Option<U256>,
    /// Uncle hashes
    pub uncles: Vec<String>,
    /// Transactions, shape chosen by the caller
    pub transactions: BlockTransactions,
}

/// Wire form of a block with `transactions` left undecoded
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    hash: Option<String>,
    parent_hash: String,
    miner: Option<String>,
    state_root: String,
    mix_hash: Option<String>,
    receipts_root: String,
    sha3_uncles: String,
    transactions_root: String,
    logs_bloom: Option<String>,
    extra_data: String,
    timestamp: String,
    #[serde(deserialize_with = "deserialize_u256")]
    difficulty: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    gas_limit: U256,
    #[serde(deserialize_with = "deserialize_u256")]
    gas_used: U256,
    #[serde(default, deserialize_with = "deserialize_opt_u256")]
    nonce: Option<U256>,
    #[serde(default, deserialize_with = "deserialize_opt_u256")]
    number: Option<U256>,
    #[serde(deserialize_with = "deserialize_u256")]
    size: U256,
    #[serde(default, deserialize_with = "deserialize_opt_u256")]
    total_difficulty: Option<U256>,
    #[serde(default)]
    uncles: Vec<String>,
    #[serde(default)]
    transactions: Option<Value>,
}

impl RawBlock {
    /// Finish decoding, reading `transactions` as full objects when
    /// `include_transactions` is set and as hashes otherwise.
    pub fn into_block(self, include_transactions: bool) -> Result<Block, serde_json::Error> {
        let transactions = match (self.transactions, include_transactions) {
            (None, true) | (Some(Value::Null), true) => BlockTransactions::Full(Vec::new()),
            (None, false) | (Some(Value::Null), false) => BlockTransactions::Hashes(Vec::new()),
            (Some(value), true) => BlockTransactions::Full(serde_json::from_value(value)?),
            (Some(value), false) => BlockTransactions::Hashes(serde_json::from_value(value)?),
        };

        Ok(Block {
            hash: self.hash,
            parent_hash: self.parent_hash,
            miner: self.miner,
            state_root: self.state_root,
            mix_hash: self.mix_hash,
            receipts_root: self.receipts_root,
            sha3_uncles: self.sha3_uncles,
            transactions_root: self.transactions_root,
            logs_bloom: self.logs_bloom,
            extra_data: self.extra_data,
            timestamp: self.timestamp,
            difficulty: self.difficulty,
            gas_limit: self.gas_limit,
            gas_used: self.gas_used,
            nonce: self.nonce,
            number: self.number,
            size: self.size,
            total_difficulty: self.total_difficulty,
            uncles: self.uncles,
            transactions,
        })
    }
}

fn deserialize_u256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    let s = String::deserialize(deserializer)?;
    hex_to_u256(&s).map_err(serde::de::Error::custom)
}

fn deserialize_opt_u256<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<U256>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => hex_to_u256(&s).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn serialize_u256<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&u256_to_hex(value))
}

fn serialize_opt_u256<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&u256_to_hex(v)),
        None => serializer.serialize_none(),
    }
}
