use anyhow::Context;
use cadastro::domain::config::ApiConfig;
use cadastro::kernel::config::load_config;
use cadastro_logger::Logger;
use cadastro_server::Server;

/// Overrides the config file location (`server` in the working directory by default).
const CONFIG_PATH_VAR: &str = "CADASTRO_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "server".to_owned());
    let cfg: ApiConfig =
        load_config(Some(&path)).with_context(|| format!("Critical: configuration '{path}' is malformed"))?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
