use super::ChainReader;
use crate::contracts::{parse_address, WalletError};
use alloy::primitives::{Address, U256};

/// A token contract bound to a node.
pub struct TokenAccessor<'a, R: ?Sized> {
    reader: &'a R,
    address: Address,
}

impl<'a, R: ChainReader + ?Sized> TokenAccessor<'a, R> {
    pub fn new(reader: &'a R, address: Address) -> Self {
        Self { reader, address }
    }

    /// Returns the token balance of `account`, queried from the node on every call.
    pub async fn balance_of(&self, account: Address) -> Result<U256, WalletError> {
        log::debug!("Calling balanceOf({}) on {}", account, self.address);
        self.reader.call_balance_of(self.address, account).await
    }

    /// Same as [`Self::balance_of`] for an account given as a hex string.
    ///
    /// Fails with [`WalletError::InvalidAddress`] before calling the node if `account`
    /// is not a 20-byte address.
    pub async fn balance_of_hex(&self, account: &str) -> Result<U256, WalletError> {
        let account = parse_address(account)?;
        self.balance_of(account).await
    }
}
