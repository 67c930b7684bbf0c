//! nameflow — command-line interface for the ENS management core.

use std::path::PathBuf;

use alloy_primitives::{Address, B256};
use anyhow::Context;
use clap::Parser;

use nameflow_chain::{ChainConfig, RpcClient};
use nameflow_dns::{dnssec_enabled_cached, DnsClient};
use nameflow_query::QueryCache;
use nameflow_resolver::check_authorization;
use nameflow_safe::SafeClient;
use nameflow_transactions::{
    prepare_record_update, send_name_transactions, SendNameRequest,
};
use nameflow_types::{AddressRecord, ChainId, EnsName, RecordSet, TextRecord};
use nameflow_utils::{init_tracing, LogFormat};

#[derive(Parser)]
#[command(name = "nameflow", about = "ENS management toolkit")]
struct Cli {
    /// Chain to operate on: "mainnet", "sepolia", "holesky", or a numeric id.
    #[arg(long, default_value = "mainnet", env = "NAMEFLOW_CHAIN")]
    chain: ChainId,

    /// JSON-RPC endpoint (defaults to the chain's public endpoint).
    #[arg(long, env = "NAMEFLOW_RPC_URL")]
    rpc_url: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "NAMEFLOW_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "NAMEFLOW_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Check whether DNSSEC is enabled for a DNS name.
    Dnssec { name: EnsName },

    /// Check whether an account may write records through the name's
    /// resolver.
    Authorize {
        name: EnsName,
        /// The account that would sign the record updates.
        #[arg(long)]
        account: Option<Address>,
    },

    /// Assemble the transaction list for sending a name.
    PlanSend {
        name: EnsName,
        #[arg(long)]
        recipient: Address,
        #[arg(long)]
        set_eth_record: bool,
        #[arg(long)]
        reset_profile: bool,
        #[arg(long)]
        send_manager: bool,
        #[arg(long)]
        send_owner: bool,
    },

    /// Prepare a record-update multicall for a name.
    SetRecords {
        name: EnsName,
        /// ETH address record.
        #[arg(long)]
        eth: Option<Address>,
        /// Text records as key=value pairs.
        #[arg(long = "text", value_parser = parse_text_record)]
        texts: Vec<TextRecord>,
        /// Wipe existing records first.
        #[arg(long)]
        clear: bool,
        /// The signing account.
        #[arg(long)]
        from: Address,
    },

    /// Resolve a Safe transaction hash to its on-chain transaction hash.
    SafeTx { safe_tx_hash: B256 },
}

fn parse_text_record(raw: &str) -> Result<TextRecord, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;
    Ok(TextRecord::new(key, value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format);

    match &cli.command {
        Command::Dnssec { name } => {
            let cache = QueryCache::new();
            let client = DnsClient::new()?;
            match dnssec_enabled_cached(&cache, &client, name).await? {
                Some(true) => println!("DNSSEC enabled for {name}"),
                Some(false) => println!("DNSSEC disabled for {name}"),
                None => println!("{name} is not subject to the DNSSEC check"),
            }
        }
        Command::Authorize { name, account } => {
            let client = rpc_client(&cli)?;
            let cache = QueryCache::new();
            let authorization =
                check_authorization(&client, &cache, name, *account).await?;
            println!("{}", serde_json::to_string_pretty(&authorization)?);
        }
        Command::PlanSend {
            name,
            recipient,
            set_eth_record,
            reset_profile,
            send_manager,
            send_owner,
        } => {
            let client = rpc_client(&cli)?;
            let resolver_address = client.get_resolver(name).await?;
            let request = SendNameRequest {
                name: name.clone(),
                recipient: Some(*recipient),
                set_eth_record: *set_eth_record,
                reset_profile: *reset_profile,
                send_manager: *send_manager,
                send_owner: *send_owner,
                resolver_address,
            };
            let items = send_name_transactions(&request);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Command::SetRecords {
            name,
            eth,
            texts,
            clear,
            from,
        } => {
            let client = rpc_client(&cli)?;
            let records = RecordSet {
                clear_records: *clear,
                coins: (*eth).map(AddressRecord::eth).into_iter().collect(),
                texts: texts.clone(),
                content_hash: None,
            };
            let update =
                prepare_record_update(&client, name, &records, Some(*from)).await?;
            println!("resolver: {}", update.resolver);
            println!("from:     {}", update.from);
            println!("calldata: {}", update.calldata);
        }
        Command::SafeTx { safe_tx_hash } => {
            let client = SafeClient::new()?;
            match client.tx_from_safe_tx_hash(cli.chain, *safe_tx_hash).await? {
                Some(tx_hash) => println!("executed in {tx_hash}"),
                None => println!("no executed transaction found"),
            }
        }
    }

    Ok(())
}

/// Resolve chain configuration: file settings as the base, flags override.
fn rpc_client(cli: &Cli) -> anyhow::Result<RpcClient> {
    let mut config = match &cli.config {
        Some(path) => ChainConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ChainConfig::for_chain(cli.chain)?,
    };
    if let Some(url) = &cli.rpc_url {
        config.rpc_url = url.clone();
    }
    Ok(RpcClient::new(config)?)
}
