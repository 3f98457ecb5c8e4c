use eyre::{Context, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::try_init().wrap_err("could not initialize env_logger")?;
    color_eyre::install().wrap_err("could not install color_eyre")?;

    token_wallet::cli().await?;

    Ok(())
}
