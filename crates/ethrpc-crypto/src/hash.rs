//! Keccak-256 hashing

use ethrpc_primitives::H256;
use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of `data`.
///
/// This is the pre-standard Keccak used for transaction hashes, signing
/// hashes and address derivation, not NIST SHA3-256.
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}
