//! Typed query and submission commands

use ethrpc_client::BlockTransactions;
use ethrpc_primitives::u256_to_hex;

use super::{client, parse_address, parse_block_tag, parse_hash};
use crate::{config::Config, output::Output, CliError};

pub async fn balance(config: &Config, address: &str, block: &str, json: bool) -> Result<(), CliError> {
    let address = parse_address(address)?;
    let block = parse_block_tag(block)?;
    let balance = client(config).get_balance(&address, block).await?;

    Output::new(json)
        .field("address", &address.to_hex())
        .field("block", &block.to_string())
        .field("balance_wei", &balance.to_string())
        .message(&format!("Balance: {} wei", balance))
        .print();

    Ok(())
}

pub async fn nonce(config: &Config, address: &str, block: &str, json: bool) -> Result<(), CliError> {
    let address = parse_address(address)?;
    let block = parse_block_tag(block)?;
    let nonce = client(config).get_transaction_count(&address, block).await?;

    Output::new(json)
        .field("address", &address.to_hex())
        .field("block", &block.to_string())
        .field_u64("nonce", nonce)
        .message(&format!("Nonce: {}", nonce))
        .print();

    Ok(())
}

pub async fn block_number(config: &Config, json: bool) -> Result<(), CliError> {
    let number = client(config).block_number().await?;

    Output::new(json)
        .field("block_number", &number.to_string())
        .field("block_number_hex", &u256_to_hex(&number))
        .message(&format!("Block Number: {}", number))
        .print();

    Ok(())
}

pub async fn net_version(config: &Config, json: bool) -> Result<(), CliError> {
    let version = client(config).net_version().await?;

    Output::new(json)
        .field_value("net_version", version.into())
        .message(&format!("Network: {}", version))
        .print();

    Ok(())
}

pub async fn block(config: &Config, tag: &str, full: bool, json: bool) -> Result<(), CliError> {
    let tag = parse_block_tag(tag)?;
    let block = client(config)
        .get_block_by_number(tag, full)
        .await?
        .ok_or_else(|| CliError::InvalidInput(format!("block {} not found", tag)))?;

    let number = block
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "pending".to_string());
    let mut lines = vec![
        format!("Block:        {}", number),
        format!("Hash:         {}", block.hash.as_deref().unwrap_or("pending")),
        format!("Parent:       {}", block.parent_hash),
        format!("Timestamp:    {}", block.timestamp),
        format!("Gas Used:     {} / {}", block.gas_used, block.gas_limit),
        format!("Transactions: {}", block.transactions.len()),
    ];
    match &block.transactions {
        BlockTransactions::Hashes(hashes) => {
            lines.extend(hashes.iter().map(|h| format!("  {}", h)));
        }
        BlockTransactions::Full(txs) => {
            lines.extend(txs.iter().map(|tx| {
                format!(
                    "  {} {} -> {} value {}",
                    tx.hash,
                    tx.from,
                    tx.to.as_deref().unwrap_or("(create)"),
                    tx.value
                )
            }));
        }
    }

    Output::new(json)
        .field_value("block", serde_json::to_value(&block)?)
        .message(&lines.join("\n"))
        .print();

    Ok(())
}

pub async fn receipt(config: &Config, hash: &str, json: bool) -> Result<(), CliError> {
    let hash = parse_hash(hash)?;
    let receipt = client(config)
        .get_transaction_receipt(&hash)
        .await?
        .ok_or_else(|| CliError::InvalidInput(format!("no receipt for {}", hash)))?;

    let status = match receipt.succeeded() {
        Some(true) => "success",
        Some(false) => "failed",
        None => "unknown",
    };
    let mut lines = vec![
        format!("Transaction: {}", receipt.transaction_hash),
        format!("Block:       {}", receipt.block_number),
        format!("Status:      {}", status),
        format!("Gas Used:    {}", receipt.gas_used),
        format!("Logs:        {}", receipt.logs.len()),
    ];
    if let Some(contract) = &receipt.contract_address {
        lines.push(format!("Contract:    {}", contract));
    }

    Output::new(json)
        .field_value("receipt", serde_json::to_value(&receipt)?)
        .message(&lines.join("\n"))
        .print();

    Ok(())
}

pub async fn send_raw(config: &Config, signed_tx: &str, json: bool) -> Result<(), CliError> {
    let hash = client(config).send_raw_transaction(signed_tx).await?;

    Output::new(json)
        .field("hash", &hash)
        .message(&format!("Transaction sent: {}", hash))
        .print();

    Ok(())
}
