use anyhow::Result;
use clap::Parser;
use iclean_forms::preview_cli::{handle_render_command, RenderCli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iclean_forms=info")),
        )
        .init();

    let cli = RenderCli::parse();
    let output = handle_render_command(cli).await?;
    println!("{}", output.display());
    Ok(())
}
