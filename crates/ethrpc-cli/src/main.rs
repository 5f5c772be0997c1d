//! # ethrpc-cli
//!
//! Command-line interface for Ethereum JSON-RPC nodes.
//!
//! ## Usage
//!
//! ```bash
//! # Raw requests
//! ethrpc request eth_getBlockByNumber 436 true
//! ethrpc request eth_getUncleCountByBlockNumber 0xe8
//!
//! # Typed queries
//! ethrpc balance 0x407d73d8a49eeb85d32cf465507dd71d507100c1
//! ethrpc nonce 0x407d73d8a49eeb85d32cf465507dd71d507100c1 pending
//! ethrpc block latest --full
//! ethrpc receipt 0x...
//!
//! # Accounts and transactions
//! ethrpc account create
//! ethrpc tx send --key 0x... --to 0x... --value 1000000000000000000
//! ```

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// Ethereum JSON-RPC command-line client
#[derive(Parser, Debug)]
#[command(name = "ethrpc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// RPC endpoint URL (overrides the config file)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Send a raw JSON-RPC request and print the reply
    Request {
        /// Method name
        method: String,
        /// Positional parameters
        args: Vec<String>,
    },
    /// Balance of an address in wei
    Balance {
        /// Address to query
        address: String,
        /// Block number or tag
        #[arg(default_value = "latest")]
        block: String,
    },
    /// Transaction count of an address
    Nonce {
        /// Address to query
        address: String,
        /// Block number or tag
        #[arg(default_value = "latest")]
        block: String,
    },
    /// Current block number
    BlockNumber,
    /// Network id
    NetVersion,
    /// Block by number or tag
    Block {
        /// Block number or tag
        #[arg(default_value = "latest")]
        tag: String,
        /// Include full transaction objects
        #[arg(long)]
        full: bool,
    },
    /// Transaction receipt
    Receipt {
        /// Transaction hash
        hash: String,
    },
    /// Submit a signed raw transaction
    SendRaw {
        /// Signed transaction (hex)
        signed_tx: String,
    },
    /// Account management
    #[command(subcommand)]
    Account(commands::account::AccountCommand),
    /// Transaction operations
    #[command(subcommand)]
    Tx(commands::tx::TxCommand),
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set RPC URL
        #[arg(long)]
        set_rpc: Option<String>,
        /// Set chain ID
        #[arg(long)]
        set_chain_id: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let mut config = Config::load();

    // Override RPC URL if provided
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }

    let json = cli.json;
    let result = match cli.command {
        Commands::Request { method, args } => {
            commands::request::execute(&config, &method, &args).await
        }
        Commands::Balance { address, block } => {
            commands::eth::balance(&config, &address, &block, json).await
        }
        Commands::Nonce { address, block } => {
            commands::eth::nonce(&config, &address, &block, json).await
        }
        Commands::BlockNumber => commands::eth::block_number(&config, json).await,
        Commands::NetVersion => commands::eth::net_version(&config, json).await,
        Commands::Block { tag, full } => commands::eth::block(&config, &tag, full, json).await,
        Commands::Receipt { hash } => commands::eth::receipt(&config, &hash, json).await,
        Commands::SendRaw { signed_tx } => commands::eth::send_raw(&config, &signed_tx, json).await,
        Commands::Account(cmd) => cmd.execute(json),
        Commands::Tx(cmd) => cmd.execute(&config, json).await,
        Commands::Config {
            show,
            set_rpc,
            set_chain_id,
        } => handle_config(&mut config, show, set_rpc, set_chain_id, json),
    };

    if let Err(e) = result {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_rpc: Option<String>,
    set_chain_id: Option<u64>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(rpc) = set_rpc {
        config.rpc_url = rpc;
        modified = true;
    }

    if let Some(chain_id) = set_chain_id {
        config.chain_id = Some(chain_id);
        modified = true;
    }

    if modified {
        let path = config.save()?;
        Output::new(json)
            .field("status", "saved")
            .field("path", &path.display().to_string())
            .message(&format!("Configuration saved to {}", path.display()))
            .print();
    } else if show {
        let chain_id = config
            .chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "(from node)".to_string());
        Output::new(json)
            .field("rpc_url", &config.rpc_url)
            .field_value("chain_id", serde_json::to_value(config.chain_id)?)
            .field_u64("gas_limit", config.gas_limit)
            .field_u64("gas_price", config.gas_price)
            .message(&format!(
                "RPC URL: {}\nChain ID: {}\nGas Limit: {}\nGas Price: {} wei",
                config.rpc_url, chain_id, config.gas_limit, config.gas_price
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-rpc/--set-chain-id to modify")
            .print();
    }

    Ok(())
}
