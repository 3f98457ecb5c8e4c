mod addresses;
pub use addresses::parse_address;

mod balance;
pub use balance::{to_decimal, Precision, TokenBalance, DECIMALS, DEFAULT_FRACTION_DIGITS};

mod errors;
pub use errors::WalletError;

mod interfaces;
pub use interfaces::ERC20;

/// Display label of the native coin.
pub const NATIVE_SYMBOL: &str = "ETH";

/// Display label of the token.
pub const TOKEN_SYMBOL: &str = "uniETH";
