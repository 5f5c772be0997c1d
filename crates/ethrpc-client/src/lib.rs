//! # ethrpc-client
//!
//! Typed JSON-RPC 2.0 client for Ethereum-compatible nodes.
//!
//! ## Features
//!
//! - **Client**: account, block, receipt and submission bindings
//! - **Transport**: pluggable request/response exchange (HTTP or in-memory)
//! - **Account / Eip155Signer**: local keys and replay-protected signing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ethrpc_client::{BlockTag, Client};
//! use ethrpc_primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new_http("http://127.0.0.1:8545");
//!
//!     let address = Address::from_hex("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266")?;
//!     let balance = client.get_balance(&address, BlockTag::Latest).await?;
//!     println!("Balance: {} wei", balance);
//!
//!     if let Some(block) = client.get_block_by_number(BlockTag::Latest, false).await? {
//!         println!("Block {:?} has {} transactions", block.number, block.transactions.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Signing
//!
//! ```rust,no_run
//! use ethrpc_client::{sign_transaction, Account, BlockTag, Client, Eip155Signer};
//! use ethrpc_primitives::{Address, U256};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new_http("http://127.0.0.1:8545");
//!     let account = Account::from_hex_key(
//!         "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
//!     )?;
//!     let nonce = client.get_transaction_count(account.address(), BlockTag::Pending).await?;
//!
//!     let tx = sign_transaction(
//!         &Eip155Signer::new(1337),
//!         &account,
//!         nonce,
//!         Some(Address::from_hex("0x70997970c51812dc3a010c7d01b50e0d17dc79c8")?),
//!         U256::exp10(18),
//!         21_000,
//!         U256::from(1_000_000_000u64),
//!         Vec::new(),
//!     )?;
//!     let hash = client.send_transaction(&tx).await?;
//!     println!("Sent {}", hash);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod account;
pub mod block;
mod client;
pub mod envelope;
mod error;
mod params;
mod signer;
mod transport;
pub mod types;

pub use account::Account;
pub use block::{Block, BlockTransactions};
pub use client::Client;
pub use error::ClientError;
pub use params::{BlockTag, Param};
pub use signer::{sign_transaction, Eip155Signer, LegacyTx, SignedTransaction};
pub use transport::{MockTransport, Transport};
pub use types::{Log, Receipt, Transaction};

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export primitives for convenience
pub use ethrpc_primitives::{Address, H256, U256};
