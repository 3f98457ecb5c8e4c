use crate::contracts::{Precision, TokenBalance, WalletError, NATIVE_SYMBOL, TOKEN_SYMBOL};
use crate::node::{ChainReader, TokenAccessor};
use alloy::primitives::Address;
use eyre::{Context, Result};
use std::io::Write;

/// Returns the native coin balance of `account`.
pub async fn native_balance<R>(
    node: &R,
    account: Address,
    precision: Precision,
) -> Result<TokenBalance, WalletError>
where
    R: ChainReader + ?Sized,
{
    let amount = node.get_native_balance(account).await?;
    Ok(TokenBalance::new(amount, NATIVE_SYMBOL, precision))
}

/// Returns the uniETH balance of `account`, read from the token contract at `token`.
pub async fn token_balance<R>(
    node: &R,
    token: Address,
    account: Address,
    precision: Precision,
) -> Result<TokenBalance, WalletError>
where
    R: ChainReader + ?Sized,
{
    let amount = TokenAccessor::new(node, token).balance_of(account).await?;
    Ok(TokenBalance::new(amount, TOKEN_SYMBOL, precision))
}

/// Prints the native coin balance of `account`.
pub async fn display_native_balance<R, W>(
    node: &R,
    account: Address,
    precision: Precision,
    out: &mut W,
) -> Result<()>
where
    R: ChainReader + ?Sized,
    W: Write,
{
    log::debug!("Fetching {} balance of {}", NATIVE_SYMBOL, account);
    let balance = native_balance(node, account, precision)
        .await
        .wrap_err("Error getting balance")?;
    writeln!(out, "{}", balance)?;

    Ok(())
}

/// Prints the uniETH balance of `account`.
pub async fn display_token_balance<R, W>(
    node: &R,
    token: Address,
    account: Address,
    precision: Precision,
    out: &mut W,
) -> Result<()>
where
    R: ChainReader + ?Sized,
    W: Write,
{
    log::debug!("Fetching {} balance of {}", TOKEN_SYMBOL, account);
    let balance = token_balance(node, token, account, precision)
        .await
        .wrap_err_with(|| format!("Failed to load the {} balance", TOKEN_SYMBOL))?;
    writeln!(out, "{}", balance)?;

    Ok(())
}
