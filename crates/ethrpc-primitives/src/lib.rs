//! # ethrpc-primitives
//!
//! Primitive types shared by the ethrpc crates.
//!
//! - [`Address`]: 20-byte account address
//! - [`H256`]: 32-byte hash
//! - [`U256`]: 256-bit unsigned integer (re-exported from `primitive-types`)
//! - [`quantity`]: conversions between `0x`-prefixed hex quantities and integers

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod hash;
pub mod quantity;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use hash::{HashError, H256};
pub use quantity::{hex_to_u256, parse_u64_auto, u256_to_hex, QuantityError};

// Re-export primitive-types for U256
pub use primitive_types::U256;
