//! SwapGraph server
//!
//! Reads configuration, connects one ledger client and serves the
//! resolver over HTTP.

use anyhow::Context;
use swapgraph_api::{start_server, AppState};
use swapgraph_core::AppConfig;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH_VAR: &str = "SWAPGRAPH_CONFIG";
const LEDGER_URL_VAR: &str = "SWAPGRAPH_LEDGER_URL";

fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => {
            tracing::info!("Loading config from {}", path);
            AppConfig::load(&path).with_context(|| format!("loading {}", path))?
        }
        Err(_) => AppConfig::default(),
    };

    if let Ok(url) = std::env::var(LEDGER_URL_VAR) {
        config.ledger.url = url;
    }

    Ok(config)
}

/// Debug for every workspace crate, info for dependencies
fn log_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("swapgraph=debug".parse()?)
        .add_directive("routing=debug".parse()?)
        .add_directive("ledger_client=debug".parse()?)
        .add_directive("info".parse()?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(log_filter()?).init();

    tracing::info!("Starting SwapGraph");

    let config = load_config()?;
    let addr = config.api_addr();
    tracing::info!(
        ledger = %config.ledger.url,
        max_depth = config.resolver.max_depth,
        max_path_length = config.resolver.max_path_length,
        scope = ?config.resolver.path_scope,
        "Resolver configured"
    );

    let state = AppState::from_config(config).context("building application state")?;
    start_server(state, addr)
        .await
        .context("API server failed")?;

    Ok(())
}
