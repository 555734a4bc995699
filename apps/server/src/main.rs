use anyhow::Context;
use lectio::domain::config::ApiConfig;
use lectio::domain::constants::CONFIG_FILE;
use lectio::kernel::config::load_config;
use lectio_logger::Logger;
use lectio_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some(CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)
        .context("Failed to initialize logging")?;

    Server::builder().config(cfg).build()?.run().await
}
