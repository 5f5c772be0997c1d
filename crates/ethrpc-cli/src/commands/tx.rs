//! Transaction commands

use clap::{Args, Subcommand};
use ethrpc_client::{sign_transaction, Account, BlockTag, Eip155Signer, U256};

use super::{client, parse_address, parse_wei};
use crate::{config::Config, output::Output, CliError};

/// Transaction subcommands
#[derive(Debug, Subcommand)]
pub enum TxCommand {
    /// Sign a transfer or call with EIP-155 and submit it
    Send(SendArgs),
}

/// Arguments of `tx send`
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Private key (hex)
    #[arg(short, long)]
    key: String,
    /// Recipient address
    #[arg(short, long)]
    to: String,
    /// Value in wei (decimal or 0x hex)
    #[arg(short, long, default_value = "0")]
    value: String,
    /// Gas limit (defaults to the configured value)
    #[arg(long)]
    gas_limit: Option<u64>,
    /// Gas price in wei (defaults to the configured value)
    #[arg(long)]
    gas_price: Option<String>,
    /// Call data (hex)
    #[arg(short, long)]
    data: Option<String>,
    /// Nonce (fetched from the node if not specified)
    #[arg(long)]
    nonce: Option<u64>,
}

impl TxCommand {
    pub async fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        match self {
            TxCommand::Send(args) => send_tx(config, args, json).await,
        }
    }
}

fn parse_data(data: Option<&str>) -> Result<Vec<u8>, CliError> {
    match data {
        None => Ok(Vec::new()),
        Some(s) => {
            let s = s.strip_prefix("0x").unwrap_or(s);
            hex::decode(s).map_err(|e| CliError::InvalidHex(e.to_string()))
        }
    }
}

async fn send_tx(config: &Config, args: SendArgs, json: bool) -> Result<(), CliError> {
    let account = Account::from_hex_key(&args.key)?;
    let to = parse_address(&args.to)?;
    let value = parse_wei(&args.value)?;
    let gas_price = match &args.gas_price {
        Some(price) => parse_wei(price)?,
        None => U256::from(config.gas_price),
    };
    let gas_limit = args.gas_limit.unwrap_or(config.gas_limit);
    let data = parse_data(args.data.as_deref())?;

    let client = client(config);

    let nonce = match args.nonce {
        Some(n) => n,
        None => {
            client
                .get_transaction_count(account.address(), BlockTag::Pending)
                .await?
        }
    };

    let chain_id = match config.chain_id {
        Some(id) => id,
        None => {
            let id = client.net_version().await?;
            u64::try_from(id)
                .map_err(|_| CliError::InvalidInput(format!("node reported network id {}", id)))?
        }
    };
    tracing::debug!(nonce, chain_id, gas_limit, "signing transaction");

    let signed = sign_transaction(
        &Eip155Signer::new(chain_id),
        &account,
        nonce,
        Some(to),
        value,
        gas_limit,
        gas_price,
        data,
    )?;
    let hash = client.send_transaction(&signed).await?;

    Output::new(json)
        .field("hash", &hash)
        .field("from", &account.checksum_address())
        .field("to", &to.to_hex())
        .field("value_wei", &value.to_string())
        .field_u64("nonce", nonce)
        .field_u64("chain_id", chain_id)
        .message(&format!(
            "Transaction sent: {}\nFrom:  {}\nTo:    {}\nValue: {} wei\nNonce: {}",
            hash,
            account.checksum_address(),
            to.to_hex(),
            value,
            nonce
        ))
        .print();

    Ok(())
}
