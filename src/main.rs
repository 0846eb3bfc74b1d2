use std::net::SocketAddr;

use clap::Parser;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use draft_order_admin::web::{self, AppState};
use draft_order_admin::{AdminConfigBuilder, ConfigError};

/// Server-rendered admin panel for Shopify draft orders.
///
/// Shop credentials come from the environment (or a `.env` file):
/// `SHOPIFY_SHOP`, `SHOPIFY_ACCESS_TOKEN`, and optionally
/// `SHOPIFY_API_VERSION`, `SHOPIFY_API_HOST`, `SHOPIFY_DEFAULT_CURRENCY`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on, overriding BIND_ADDR.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Emit JSON log lines, overriding LOG_JSON.
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut builder = AdminConfigBuilder::from_env()?;
    if let Some(bind) = cli.bind {
        builder = builder.bind_addr(bind);
    }
    if cli.log_json {
        builder = builder.log_json(true);
    }
    let config = builder.build()?;

    init_tracing(config.log_json());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %config.bind_addr(),
        shop = %config.shop(),
        api_version = %config.api_version(),
        "Draft order admin listening"
    );

    web::serve(listener, AppState::from_config(&config), shutdown_signal()).await?;
    Ok(())
}
