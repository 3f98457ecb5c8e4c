mod token;
pub use token::TokenAccessor;

#[cfg(feature = "anvil")]
mod anvil;

use crate::configurations::EndpointTemplate;
use crate::contracts::{WalletError, ERC20};
use alloy::{
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    transports::http::{reqwest::Url, Client, Http},
};
use async_trait::async_trait;

type WalletProviderTransport = Http<Client>;
type WalletProvider = RootProvider<WalletProviderTransport>;

/// Read-only view of a node, as used by the commands.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Returns the chain id of the connected network.
    async fn get_chain_id(&self) -> Result<u64, WalletError>;

    /// Returns the native coin balance of `address` at the latest block.
    async fn get_native_balance(&self, address: Address) -> Result<U256, WalletError>;

    /// Calls `balanceOf(account)` on the token contract at `token`.
    async fn call_balance_of(&self, token: Address, account: Address)
        -> Result<U256, WalletError>;
}

/// A wallet node talking JSON-RPC over HTTP.
pub struct WalletNode {
    /// Endpoint of the node.
    rpc_url: Url,
    /// Underlying provider type.
    pub provider: WalletProvider,
}

impl WalletNode {
    /// Creates a node connected to the given RPC URL.
    ///
    /// The HTTP transport is lazy, so nothing is sent until the first query.
    pub fn new(rpc_url: Url) -> Self {
        let provider = ProviderBuilder::new().on_http(rpc_url.clone());
        Self { rpc_url, provider }
    }

    /// Renders the endpoint for `api_key` and connects to it.
    pub fn connect(template: &EndpointTemplate, api_key: &str) -> Result<Self, WalletError> {
        let rpc_url = template.render(api_key)?;
        let node = Self::new(rpc_url);
        log::info!("{}", node);
        Ok(node)
    }
}

#[async_trait]
impl ChainReader for WalletNode {
    async fn get_chain_id(&self) -> Result<u64, WalletError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| WalletError::query("get chain id", e))
    }

    async fn get_native_balance(&self, address: Address) -> Result<U256, WalletError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| WalletError::query("get balance", e))
    }

    async fn call_balance_of(
        &self,
        token: Address,
        account: Address,
    ) -> Result<U256, WalletError> {
        let contract = ERC20::new(token, &self.provider);
        let balance = contract
            .balanceOf(account)
            .call()
            .await
            .map_err(|e| WalletError::query("call balanceOf", e))?;

        Ok(balance._0)
    }
}

impl core::fmt::Display for WalletNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the path carries the API key, so only the host is shown
        write!(
            f,
            "Token Wallet v{}, node at {}",
            env!("CARGO_PKG_VERSION"),
            self.rpc_url.host_str().unwrap_or("<unknown host>"),
        )
    }
}
