//! Subcommand implementations

pub mod account;
pub mod eth;
pub mod request;
pub mod tx;

use ethrpc_client::{Address, BlockTag, Client, H256, U256};
use ethrpc_primitives::hex_to_u256;

use crate::{config::Config, CliError};

/// Client for the configured endpoint
pub(crate) fn client(config: &Config) -> Client {
    tracing::debug!(rpc_url = %config.rpc_url, "using endpoint");
    Client::new_http(config.rpc_url.clone())
}

pub(crate) fn parse_address(s: &str) -> Result<Address, CliError> {
    Address::from_hex(s).map_err(|e| CliError::InvalidAddress(e.to_string()))
}

pub(crate) fn parse_hash(s: &str) -> Result<H256, CliError> {
    H256::from_hex(s).map_err(|e| CliError::InvalidHex(e.to_string()))
}

pub(crate) fn parse_block_tag(s: &str) -> Result<BlockTag, CliError> {
    s.parse()
        .map_err(|e| CliError::InvalidInput(format!("invalid block {:?}: {}", s, e)))
}

/// Amount in wei, decimal or `0x` hex
pub(crate) fn parse_wei(s: &str) -> Result<U256, CliError> {
    let parsed = if s.starts_with("0x") || s.starts_with("0X") {
        hex_to_u256(s).map_err(|e| e.to_string())
    } else {
        U256::from_dec_str(s).map_err(|e| format!("{:?}", e))
    };
    parsed.map_err(|e| CliError::InvalidAmount(format!("{}: {}", s, e)))
}
