use anyhow::Context;
use clap::Parser;
use subnetter::cli::Cli;
use subnetter::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    server::run(cli.into_config())
        .await
        .context("server exited with an error")
}
