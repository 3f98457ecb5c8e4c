mod cli;
pub use cli::cli;

pub mod commands;

pub mod configurations;
pub use configurations::{EndpointTemplate, WalletConfig};

mod contracts;
pub use contracts::{
    parse_address, to_decimal, Precision, TokenBalance, WalletError, DECIMALS,
    DEFAULT_FRACTION_DIGITS, ERC20, NATIVE_SYMBOL, TOKEN_SYMBOL,
};

mod node;
pub use node::{ChainReader, TokenAccessor, WalletNode};
