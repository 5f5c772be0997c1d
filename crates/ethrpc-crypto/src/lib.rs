//! # ethrpc-crypto
//!
//! Cryptographic primitives used to build and sign transactions.
//!
//! - Keccak-256 hashing
//! - ECDSA signing (secp256k1) with recoverable, low-s signatures
//! - Public key recovery
//! - Address derivation and EIP-55 checksum formatting

#![warn(missing_docs)]
#![warn(clippy::all)]

mod checksum;
mod error;
mod hash;
mod signature;

pub use checksum::to_checksum_address;
pub use error::CryptoError;
pub use hash::keccak256;
pub use signature::{
    public_key_to_address, recover_public_key, sign, PrivateKey, PublicKey, Signature,
};
