use crate::node::ChainReader;
use alloy_chains::Chain;
use eyre::{Context, Result};
use std::io::Write;

/// Prints the chain id of the connected network, and returns it.
pub async fn display_chain_id<R, W>(node: &R, out: &mut W) -> Result<u64>
where
    R: ChainReader + ?Sized,
    W: Write,
{
    let chain_id = node
        .get_chain_id()
        .await
        .wrap_err("Error getting chain ID")?;
    log::info!("Connected to {}", Chain::from_id(chain_id));
    writeln!(out, "Chain ID: {}", chain_id)?;

    Ok(chain_id)
}
