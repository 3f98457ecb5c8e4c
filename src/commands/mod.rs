//! Queries and their printed form, shared by every command shape.

mod balance;
pub use balance::{display_native_balance, display_token_balance, native_balance, token_balance};

mod chain;
pub use chain::display_chain_id;

use crate::{configurations::WalletConfig, contracts::Precision, node::ChainReader};
use eyre::Result;
use std::io::Write;

/// Prints chain id, native balance and token balance of the configured account, in order.
///
/// Queries are issued one after another, and the first failure stops the run.
pub async fn display_summary<R, W>(
    node: &R,
    config: &WalletConfig,
    precision: Precision,
    out: &mut W,
) -> Result<()>
where
    R: ChainReader + ?Sized,
    W: Write,
{
    display_chain_id(node, out).await?;
    display_native_balance(node, config.user_address, precision, out).await?;
    display_token_balance(
        node,
        config.token_address,
        config.user_address,
        precision,
        out,
    )
    .await?;

    Ok(())
}
