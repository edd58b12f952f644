use anyhow::Result;
use iclean_forms::{core::ConfigManager, start_web_server};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iclean_forms=info,rocket::server=off")),
        )
        .init();

    let config = ConfigManager::load()?;

    info!("Starting i-Clean forms service");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(config).await
}
