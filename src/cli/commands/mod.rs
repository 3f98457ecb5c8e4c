use super::parsers::*;
use alloy::primitives::Address;
use clap::{Args, Subcommand};

// https://docs.rs/clap/latest/clap/_derive/index.html#arg-attributes
#[derive(Subcommand)]
pub enum Commands {
    /// Check balance for a given address.
    #[command(name = "balance")]
    Balance(AccountArgs),
    /// Checks the uniETH balance for the given address.
    #[command(name = "uniethBalance")]
    UniethBalance(AccountArgs),
    /// Returns the chain ID.
    #[command(name = "chainID")]
    ChainId(ApiKeyArgs),
}

#[derive(Args)]
pub struct ApiKeyArgs {
    /// API key of the access node, embedded in the endpoint URL.
    #[arg(short = 'z', long = "apiKey", visible_alias = "apikey", value_name = "API_KEY")]
    pub api_key: String,
}

#[derive(Args)]
pub struct AccountArgs {
    /// The wallet address to check the balance of.
    #[arg(short, long, value_name = "ADDRESS", value_parser = parse_address_arg)]
    pub address: Address,

    #[command(flatten)]
    pub key: ApiKeyArgs,
}
