use portfolio_admin::config::Config;
use portfolio_admin::server::start_server;
use portfolio_admin::state::AppState;
use portfolio_admin::store::ContentStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let store = ContentStore::new(&config)?;
    let state = AppState::new(store);

    let port = start_server(&config, state).await?;
    info!("Portfolio admin running on http://127.0.0.1:{port}");

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    Ok(())
}
