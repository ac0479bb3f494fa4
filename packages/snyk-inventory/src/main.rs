use anyhow::Result;
use clap::Parser;
use snyk_inventory::{pipeline, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let client = cli.client();

    pipeline::run(&client, &cli.group, &cli.output).await?;

    println!("Project data written to {}", cli.output.display());
    Ok(())
}
