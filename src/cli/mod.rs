mod commands;
use commands::Commands;

mod parsers;
use parsers::*;

use crate::{
    commands as queries,
    configurations::{
        token_address_from, ConfigSource, EndpointTemplate, WalletConfig, RPC_URL_TEMPLATE,
    },
    contracts::Precision,
    node::WalletNode,
};
use clap::Parser;
use eyre::{Context, Result};
use std::{
    io,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Without a command, prints chain ID, ETH balance and uniETH balance of the configured account.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Env file with `ETH_API_KEY`, `UNIETH_TOKEN_ADDRESS` and `USER_ADDRESS`.
    #[arg(long, global = true, env = "TOKEN_WALLET_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Node endpoint template, `{api_key}` is replaced with the API key.
    /// Falls back to `RPC_URL_TEMPLATE`.
    #[arg(long, global = true, value_parser = parse_endpoint_template)]
    rpc_url_template: Option<EndpointTemplate>,

    /// Print the exact decimal balance instead of rounding to 8 digits.
    #[arg(long, global = true)]
    full_precision: bool,
}

/// Main CLI entry point.
pub async fn cli() -> Result<()> {
    // default commands such as version and help exit at this point,
    // and so do missing or malformed flags
    let cli = Cli::parse();

    // only the token balance and the summary read wallet config
    let needs_config = matches!(cli.command, None | Some(Commands::UniethBalance(_)));
    let source = load_source(&cli.env_file, needs_config)?;

    let template = cli
        .rpc_url_template
        .or_else(|| source.get(RPC_URL_TEMPLATE).map(EndpointTemplate::new))
        .unwrap_or_default();
    let precision = if cli.full_precision {
        Precision::Full
    } else {
        Precision::default()
    };
    let mut out = io::stdout();

    match cli.command {
        Some(Commands::Balance(args)) => {
            let node = connect(&template, &args.key.api_key)?;
            queries::display_native_balance(&node, args.address, precision, &mut out).await?;
        }
        Some(Commands::UniethBalance(args)) => {
            let token =
                token_address_from(|key| source.get(key)).wrap_err("Failed to load config")?;
            let node = connect(&template, &args.key.api_key)?;
            queries::display_token_balance(&node, token, args.address, precision, &mut out)
                .await?;
        }
        Some(Commands::ChainId(args)) => {
            let node = connect(&template, &args.api_key)?;
            queries::display_chain_id(&node, &mut out).await?;
        }
        None => {
            let config = WalletConfig::from_source(&source).wrap_err("Failed to load config")?;
            let node = connect(&template, &config.api_key)?;
            queries::display_summary(&node, &config, precision, &mut out).await?;
        }
    };

    Ok(())
}

/// Reads the env file at `path`.
///
/// A broken file is fatal only when `required`, otherwise it is skipped with a warning.
fn load_source(path: &Path, required: bool) -> Result<ConfigSource> {
    match ConfigSource::from_env_file(path) {
        Ok(source) => {
            if source.is_loaded() {
                log::debug!("Loaded env file {}", path.display());
            } else {
                log::warn!("Could not find env file {}", path.display());
            }
            Ok(source)
        }
        Err(err) if !required => {
            log::warn!("Ignoring env file: {}", err);
            Ok(ConfigSource::default())
        }
        Err(err) => Err(err).wrap_err("Failed to load config"),
    }
}

fn connect(template: &EndpointTemplate, api_key: &str) -> Result<WalletNode> {
    WalletNode::connect(template, api_key).wrap_err("Failed to connect to eth client")
}
