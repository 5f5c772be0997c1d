//! RPC parameter types

use std::fmt;
use std::str::FromStr;

use ethrpc_primitives::{parse_u64_auto, Address, QuantityError, H256};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One positional JSON-RPC parameter.
///
/// The params list on the wire is a heterogeneous JSON array, so each entry
/// keeps its own JSON type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    /// JSON string (addresses, hashes, hex quantities, block tags)
    String(String),
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(i64),
    /// Any other JSON value, passed through as-is
    Json(Value),
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::String(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::String(s)
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Bool(b)
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Number(n)
    }
}

impl From<Value> for Param {
    fn from(v: Value) -> Self {
        Param::Json(v)
    }
}

impl From<&Address> for Param {
    fn from(address: &Address) -> Self {
        Param::String(address.to_hex())
    }
}

impl From<&H256> for Param {
    fn from(hash: &H256) -> Self {
        Param::String(hash.to_hex())
    }
}

impl From<BlockTag> for Param {
    fn from(tag: BlockTag) -> Self {
        Param::String(tag.to_string())
    }
}

/// Block selector for state queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    /// Most recent block
    #[default]
    Latest,
    /// Genesis block
    Earliest,
    /// Pending state
    Pending,
    /// Block at the given height
    Number(u64),
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTag::Latest => f.write_str("latest"),
            BlockTag::Earliest => f.write_str("earliest"),
            BlockTag::Pending => f.write_str("pending"),
            BlockTag::Number(n) => write!(f, "0x{:x}", n),
        }
    }
}

impl FromStr for BlockTag {
    type Err = QuantityError;

    /// Accepts `latest`, `earliest`, `pending`, or a block number in any base
    /// `parse_u64_auto` understands (`0x10`, `16`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(BlockTag::Latest),
            "earliest" => Ok(BlockTag::Earliest),
            "pending" => Ok(BlockTag::Pending),
            other => parse_u64_auto(other).map(BlockTag::Number),
        }
    }
}

impl From<u64> for BlockTag {
    fn from(n: u64) -> Self {
        BlockTag::Number(n)
    }
}

impl Serialize for BlockTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
