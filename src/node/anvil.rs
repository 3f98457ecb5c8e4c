//! Anvil-related utilities.
//!
//! This module is only available when the `anvil` feature is enabled.

use super::WalletNode;
use alloy::node_bindings::{Anvil, AnvilInstance};
use eyre::Result;

impl WalletNode {
    /// Spawns a local Anvil instance and connects to it.
    ///
    /// Return the node and the Anvil instance.
    /// Note that when Anvil instance is dropped, the chain is gone as well.
    pub fn anvil_new() -> Result<(Self, AnvilInstance)> {
        let anvil = Anvil::new().try_spawn()?;
        let node = Self::new(anvil.endpoint_url());

        Ok((node, anvil))
    }
}
