//! Drives the commands with a mocked node.

use alloy::primitives::{address, utils::parse_ether, Address, U256};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use eyre::Result;
use std::{
    io,
    sync::atomic::{AtomicUsize, Ordering},
};
use token_wallet::{
    commands, ChainReader, Precision, TokenAccessor, WalletConfig, WalletError,
};

const TOKEN: Address = address!("4200000000000000000000000000000000000006");
const USER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// A node with fixed answers, `None` balances make the query fail.
struct MockNode {
    chain_id: u64,
    native: Option<U256>,
    token: Option<U256>,
    calls: AtomicUsize,
}

impl MockNode {
    fn new(native: Option<U256>, token: Option<U256>) -> Self {
        Self {
            chain_id: 1,
            native,
            token,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn failure(operation: &'static str) -> WalletError {
    WalletError::Query {
        operation,
        source: Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "node is down")),
    }
}

#[async_trait]
impl ChainReader for MockNode {
    async fn get_chain_id(&self) -> Result<u64, WalletError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.chain_id)
    }

    async fn get_native_balance(&self, address: Address) -> Result<U256, WalletError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(address, USER);
        self.native.ok_or_else(|| failure("get balance"))
    }

    async fn call_balance_of(
        &self,
        token: Address,
        account: Address,
    ) -> Result<U256, WalletError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(token, TOKEN);
        assert_eq!(account, USER);
        self.token.ok_or_else(|| failure("call balanceOf"))
    }
}

fn config() -> WalletConfig {
    WalletConfig::new("key".to_string(), TOKEN, USER)
}

#[tokio::test]
async fn test_display_chain_id() -> Result<()> {
    let node = MockNode::new(None, None);
    let mut out = Vec::new();

    let chain_id = commands::display_chain_id(&node, &mut out).await?;
    assert_eq!(chain_id, 1);
    assert_eq!(String::from_utf8(out)?, "Chain ID: 1\n");

    Ok(())
}

#[tokio::test]
async fn test_display_native_balance() -> Result<()> {
    let node = MockNode::new(Some(parse_ether("1")?), None);
    let mut out = Vec::new();

    commands::display_native_balance(&node, USER, Precision::default(), &mut out).await?;
    assert_eq!(
        String::from_utf8(out)?,
        "ETH Balance: 1000000000000000000 wei (1.00000000 ETH)\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_native_balance_failure_prints_nothing() {
    let node = MockNode::new(None, None);
    let mut out = Vec::new();

    let result =
        commands::display_native_balance(&node, USER, Precision::default(), &mut out).await;
    let err = result.unwrap_err();

    assert!(out.is_empty());
    assert!(matches!(
        err.downcast_ref::<WalletError>(),
        Some(WalletError::Query {
            operation: "get balance",
            ..
        })
    ));
}

#[tokio::test]
async fn test_display_token_balance() -> Result<()> {
    let node = MockNode::new(None, Some(parse_ether("2.5")?));
    let mut out = Vec::new();

    commands::display_token_balance(&node, TOKEN, USER, Precision::Full, &mut out).await?;
    assert_eq!(
        String::from_utf8(out)?,
        "uniETH Balance: 2500000000000000000 wei (2.5 uniETH)\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_same_precision_on_both_paths() -> Result<()> {
    let node = MockNode::new(Some(U256::from(1)), Some(U256::from(1)));

    let native = commands::native_balance(&node, USER, Precision::default()).await?;
    let token = commands::token_balance(&node, TOKEN, USER, Precision::default()).await?;
    assert_eq!(native.decimal, token.decimal);
    assert_eq!(native.decimal, BigDecimal::from(0));

    let native = commands::native_balance(&node, USER, Precision::Full).await?;
    let token = commands::token_balance(&node, TOKEN, USER, Precision::Full).await?;
    assert_eq!(native.decimal, token.decimal);
    assert_eq!(token.decimal.to_plain_string(), "0.000000000000000001");

    Ok(())
}

#[tokio::test]
async fn test_display_summary_order() -> Result<()> {
    let node = MockNode::new(Some(parse_ether("1.5")?), Some(parse_ether("2.5")?));
    let mut out = Vec::new();

    commands::display_summary(&node, &config(), Precision::default(), &mut out).await?;
    assert_eq!(
        String::from_utf8(out)?,
        "Chain ID: 1\n\
         ETH Balance: 1500000000000000000 wei (1.50000000 ETH)\n\
         uniETH Balance: 2500000000000000000 wei (2.50000000 uniETH)\n"
    );
    assert_eq!(node.calls(), 3);

    Ok(())
}

#[tokio::test]
async fn test_display_summary_stops_at_first_failure() -> Result<()> {
    let node = MockNode::new(None, Some(parse_ether("2.5")?));
    let mut out = Vec::new();

    let result = commands::display_summary(&node, &config(), Precision::default(), &mut out).await;
    assert!(result.is_err());
    assert_eq!(String::from_utf8(out)?, "Chain ID: 1\n");
    // the token is never queried
    assert_eq!(node.calls(), 2);

    Ok(())
}

#[tokio::test]
async fn test_balance_of_malformed_account() -> Result<()> {
    let node = MockNode::new(None, Some(parse_ether("2.5")?));
    let token = TokenAccessor::new(&node, TOKEN);

    let result = token.balance_of_hex("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb922").await;
    assert!(matches!(result, Err(WalletError::InvalidAddress { .. })));
    assert_eq!(node.calls(), 0);

    let balance = token
        .balance_of_hex("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        .await?;
    assert_eq!(balance, parse_ether("2.5")?);

    Ok(())
}
