//! Account management commands

use clap::Subcommand;
use ethrpc_client::Account;

use crate::{output::Output, CliError};

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Create a new account and print its key
    Create,
    /// Print the address belonging to a private key
    Address {
        /// Private key (hex)
        #[arg(short, long)]
        key: String,
    },
}

impl AccountCommand {
    pub fn execute(self, json: bool) -> Result<(), CliError> {
        match self {
            AccountCommand::Create => create_account(json),
            AccountCommand::Address { key } => show_address(&key, json),
        }
    }
}

fn create_account(json: bool) -> Result<(), CliError> {
    let account = Account::create();
    let address = account.checksum_address();
    let private_key = account.private_key_hex();

    Output::new(json)
        .field("address", &address)
        .field("private_key", &private_key)
        .message(&format!(
            "Created new account: {}\nPrivate key: {}\n\nWARNING: Save your private key securely. It cannot be recovered!",
            address, private_key
        ))
        .print();

    Ok(())
}

fn show_address(key: &str, json: bool) -> Result<(), CliError> {
    let account = Account::from_hex_key(key)?;
    let address = account.checksum_address();

    Output::new(json)
        .field("address", &address)
        .message(&format!("Address: {}", address))
        .print();

    Ok(())
}
